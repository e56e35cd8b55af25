// Singleton: one student registry per campus, created on first access.

use std::cell::OnceCell;

pub const DEFAULT_SCHOOL_NAME: &str = "University of Bucharest";

#[derive(Debug)]
pub struct StudentRegistry {
    school_name: String,
}

impl StudentRegistry {
    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn info(&self) -> String {
        format!("Registry for: {}", self.school_name)
    }
}

/// Owner of the single registry instance.
///
/// The registry is built lazily on the first call to [`Campus::registry`];
/// every later call hands out a reference to that same value.
pub struct Campus {
    school_name: String,
    registry: OnceCell<StudentRegistry>,
}

impl Campus {
    pub fn new(school_name: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            registry: OnceCell::new(),
        }
    }

    pub fn registry(&self) -> &StudentRegistry {
        self.registry.get_or_init(|| {
            tracing::debug!(school = %self.school_name, "creating student registry");
            StudentRegistry {
                school_name: self.school_name.clone(),
            }
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.registry.get().is_some()
    }
}

impl Default for Campus {
    fn default() -> Self {
        Self::new(DEFAULT_SCHOOL_NAME)
    }
}

pub fn demo(campus: &Campus) -> Vec<String> {
    let first = campus.registry();
    let second = campus.registry();
    vec![
        format!("Same registry? {}", std::ptr::eq(first, second)),
        first.info(),
    ]
}
