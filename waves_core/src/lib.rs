mod campaign;
mod config;
mod party;

pub use campaign::Campaign;
pub use party::{MemberSpec, PartySpec};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading campaign configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in '{path:?}': {message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConfigError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ConfigError::Validation {
            message: message.into(),
            path: None,
        }
    }

    /// Attach the file a path-less error came from
    pub(crate) fn at(self, file: &std::path::Path) -> Self {
        match self {
            ConfigError::Parse { error, path: None } => ConfigError::Parse {
                error,
                path: Some(file.to_path_buf()),
            },
            ConfigError::Validation {
                message,
                path: None,
            } => ConfigError::Validation {
                message,
                path: Some(file.to_path_buf()),
            },
            other => other,
        }
    }
}
