mod init;
pub use init::{init_logging, parse_level, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::config::LoggingSection;

/// Log filename used when a log directory is configured.
pub const LOG_FILENAME: &str = "stockroom.log";

/// Configuration for the logging system.
pub struct LogConfig {
    /// Write a rolling log file here in addition to stderr.
    pub log_dir: Option<PathBuf>,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

impl From<&LoggingSection> for LogConfig {
    fn from(section: &LoggingSection) -> Self {
        Self {
            log_dir: section.dir.clone(),
            log_level: parse_level(&section.level),
            json_format: section.json,
            rotation: parse_rotation(&section.rotation),
        }
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
