use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockroom::logging::{parse_level, parse_rotation};
use stockroom::LogConfig;

/// Stockroom - in-memory inventory catalog with derived SKU codes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.stockroom/config.toml)
    #[arg(long, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,
    /// Enable JSON log format
    #[arg(long, env = "STOCKROOM_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "STOCKROOM_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "STOCKROOM_LOG_ROTATION")]
    pub log_rotation: Option<String>,
    /// Also write logs to files in this directory
    #[arg(long, env = "STOCKROOM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a catalog and print each step of working with it
    Walkthrough,
    /// Print the SKU an item would receive
    Sku { name: String, category: String },
    /// Validate an item and print it, or the reason it is invalid
    Check {
        name: String,
        category: String,
        quantity: Option<String>,
    },
}

impl Args {
    /// Command-line flags take precedence over the config file.
    pub fn apply_log_overrides(&self, config: &mut LogConfig) {
        if self.log_json {
            config.json_format = true;
        }
        if let Some(level) = &self.log_level {
            config.log_level = parse_level(level);
        }
        if let Some(rotation) = &self.log_rotation {
            config.rotation = parse_rotation(rotation);
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
    }
}
