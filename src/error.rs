use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error while writing the transcript: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Unknown pattern '{0}' (use --list to see the available patterns)")]
    UnknownPattern(String),
}

impl DemoError {
    pub fn read_config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }
}
