use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Pattern;
use crate::creational::singleton::DEFAULT_SCHOOL_NAME;
use crate::error::DemoError;
use crate::structural::proxy::DEFAULT_BLOCKED_SITES;

/// Settings for one demonstration run, read from an optional TOML file.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// classic transcript.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Colourise section headings.
    pub color: bool,
    /// Patterns to run; empty means all of them.
    pub patterns: Vec<Pattern>,
    pub school_name: String,
    pub blocked_sites: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            patterns: Vec::new(),
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            blocked_sites: DEFAULT_BLOCKED_SITES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::read_config(path, err))?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Selected patterns in driver order, without duplicates.
    pub fn selected(&self) -> Vec<Pattern> {
        if self.patterns.is_empty() {
            return Pattern::ALL.to_vec();
        }
        Pattern::ALL
            .iter()
            .copied()
            .filter(|pattern| self.patterns.contains(pattern))
            .collect()
    }
}

pub fn should_use_colors() -> bool {
    std::env::var("NO_COLOR").is_err()
}
