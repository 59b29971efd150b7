//! Domain error types for choice-selector
//!
//! The selector itself never fails; errors only arise at the host boundary:
//! - `ConfigError` for loading the choice list
//! - `SelectorError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for choice-selector
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for SelectorError
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
