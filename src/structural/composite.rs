// Composite: faculties contain departments (and other faculties), and both
// answer `show_details` the same way.

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    name: String,
    components: Vec<UniversityComponent>,
}

impl Faculty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl Into<UniversityComponent>) {
        self.components.push(component.into());
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UniversityComponent {
    Department(Department),
    Faculty(Faculty),
}

impl UniversityComponent {
    /// Pre-order walk: a faculty prints itself, then each child in insertion order.
    pub fn show_details(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect(&mut lines);
        lines
    }

    fn collect(&self, lines: &mut Vec<String>) {
        match self {
            UniversityComponent::Department(dept) => {
                lines.push(format!("Department: {}", dept.name));
            }
            UniversityComponent::Faculty(faculty) => {
                lines.push(format!("Faculty: {}", faculty.name));
                for component in &faculty.components {
                    component.collect(lines);
                }
            }
        }
    }
}

impl From<Department> for UniversityComponent {
    fn from(dept: Department) -> Self {
        UniversityComponent::Department(dept)
    }
}

impl From<Faculty> for UniversityComponent {
    fn from(faculty: Faculty) -> Self {
        UniversityComponent::Faculty(faculty)
    }
}

pub fn demo() -> Vec<String> {
    let mut csf = Faculty::new("Computer Science Faculty");
    csf.add(Department::new("CS Department"));
    csf.add(Department::new("Math Department"));
    UniversityComponent::from(csf).show_details()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let dept = UniversityComponent::from(Department::new("Physics"));
        assert_eq!(dept.show_details(), vec!["Department: Physics"]);
    }

    #[test]
    fn test_empty_faculty() {
        let faculty = Faculty::new("Law");
        assert!(faculty.is_empty());
        assert_eq!(UniversityComponent::from(faculty).show_details(), vec!["Faculty: Law"]);
    }

    #[test]
    fn test_nested_preorder() {
        let mut inner = Faculty::new("Inner");
        inner.add(Department::new("B"));

        let mut outer = Faculty::new("Outer");
        outer.add(Department::new("A"));
        outer.add(inner);
        outer.add(Department::new("C"));
        assert_eq!(outer.len(), 3);

        assert_eq!(
            UniversityComponent::from(outer).show_details(),
            vec![
                "Faculty: Outer",
                "Department: A",
                "Faculty: Inner",
                "Department: B",
                "Department: C",
            ]
        );
    }

    #[test]
    fn test_demo_lines() {
        assert_eq!(
            demo(),
            vec![
                "Faculty: Computer Science Faculty",
                "Department: CS Department",
                "Department: Math Department",
            ]
        );
    }
}
