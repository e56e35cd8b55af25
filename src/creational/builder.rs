// Builder: fluent construction of a Student.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: u32,
    faculty: String,
    year: u32,
}

impl Student {
    pub fn builder() -> StudentBuilder {
        StudentBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    pub fn year(&self) -> u32 {
        self.year
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Student: {}, {} years, {}, year {}",
            self.name, self.age, self.faculty, self.year
        )
    }
}

/// Consuming builder; fields left unset become empty text or zero.
#[derive(Debug, Default)]
pub struct StudentBuilder {
    name: Option<String>,
    age: Option<u32>,
    faculty: Option<String>,
    year: Option<u32>,
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = Some(faculty.into());
        self
    }

    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn build(self) -> Student {
        Student {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            faculty: self.faculty.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
        }
    }
}

pub fn demo() -> Vec<String> {
    let student = Student::builder()
        .name("Ion Popescu")
        .age(20)
        .faculty("Computer Science")
        .year(2)
        .build();
    vec![student.to_string()]
}
