use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Why a key config could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing exists at the path
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents are not valid JSON
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top level is not an object
    #[error("expected a JSON object in {}, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl ConfigError {
    /// True for the one case `load` treats as "no config" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_))
    }
}
