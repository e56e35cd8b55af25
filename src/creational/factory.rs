// Factory: build an animal from a type tag.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animal {
    Dog,
    Cat,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown animal type: {0}")]
pub struct UnknownAnimal(pub String);

impl Animal {
    /// Returns `None` for any tag other than `dog` or `cat`.
    pub fn from_tag(tag: &str) -> Option<Animal> {
        match tag {
            "dog" => Some(Animal::Dog),
            "cat" => Some(Animal::Cat),
            _ => None,
        }
    }

    pub fn make_sound(&self) -> &'static str {
        match self {
            Animal::Dog => "Woof woof!",
            Animal::Cat => "Meow!",
        }
    }
}

impl FromStr for Animal {
    type Err = UnknownAnimal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animal::from_tag(s).ok_or_else(|| UnknownAnimal(s.to_string()))
    }
}

pub fn demo() -> Vec<String> {
    ["dog", "cat"]
        .iter()
        .filter_map(|tag| Animal::from_tag(tag))
        .map(|animal| animal.make_sound().to_string())
        .collect()
}
