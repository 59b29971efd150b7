//! Configuration file support for choice-selector.
//!
//! The choice list is loaded from `~/.config/choice-selector/config.toml`.
//! The path is resolved with the following precedence:
//! 1. `--config <path>` CLI argument (highest priority)
//! 2. `CHOICE_SELECTOR_CONFIG` environment variable
//! 3. Default config path (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/choice-selector/config.toml
//! title = "Difficulty"
//!
//! [[choices]]
//! value = 2
//! label = "Easy"
//!
//! [[choices]]
//! value = 3
//! label = "Medium"
//! default = true
//!
//! [[choices]]
//! value = 4
//! label = "Hard"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::choice::Choice;
use crate::error::{ConfigError, ConfigResult};
use crate::log;

const CONFIG_ENV: &str = "CHOICE_SELECTOR_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title drawn on the selector border
    pub title: Option<String>,

    /// Choices in navigation order
    pub choices: Vec<Choice<Value>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            choices: default_choices(),
        }
    }
}

/// Built-in difficulty list used when no config file is present
pub fn default_choices() -> Vec<Choice<Value>> {
    vec![
        Choice::new(Value::from(2), "Easy"),
        Choice::new(Value::from(3), "Medium").with_default(),
        Choice::new(Value::from(4), "Hard"),
    ]
}

impl Config {
    /// Load configuration, falling back to defaults.
    ///
    /// A missing file is silent; unreadable or invalid files are reported
    /// on stderr and in the log.
    pub fn load(path_override: Option<&Path>) -> Self {
        let config_path = Self::resolve_path(path_override);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::log(&format!("Config fallback to defaults: {}", e));
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a specific config file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolve the config path: CLI override, then env var, then default.
    pub fn resolve_path(path_override: Option<&Path>) -> PathBuf {
        path_override
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(Self::config_path)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("choice-selector")
            .join("config.toml")
    }

    /// Title for the selector border.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Select")
    }
}
