//! Engine configuration - tunable numbers loaded from TOML

mod constants;

pub use constants::{
    BattleConstants, CritConstants, DamageConstants, DodgeConstants, StatusConstants,
};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Error loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Read and deserialize a TOML file
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Deserialize TOML text
pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
