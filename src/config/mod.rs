//! Configuration loaded from `~/.stockroom/config.toml`.
//!
//! The file is optional; if it does not exist, or a section is left out, the
//! defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::item::ValidationRules;

/// Name of the per-user stockroom folder.
pub const STOCKROOM_FOLDER: &str = ".stockroom";

/// Config file name inside [`STOCKROOM_FOLDER`].
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// Directory for log files. Logs go to stderr only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StockroomConfig {
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl StockroomConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Default config location, `~/.stockroom/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STOCKROOM_FOLDER).join(CONFIG_FILENAME))
}

/// Load the config from `path`, or from [`config_path`] when `path` is `None`.
///
/// A missing file yields `StockroomConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<StockroomConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => path,
        None => {
            debug!("Could not determine home directory; using default config");
            return Ok(StockroomConfig::default());
        }
    };

    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(StockroomConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = StockroomConfig::from_toml(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
