use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use super::{LogConfig, LOG_FILENAME};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stockroom={level}")))
}

fn stderr_layer(json: bool, level: Level) -> BoxedLayer {
    if json {
        fmt::layer()
            .json().with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .with_filter(default_filter(level)).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_ansi(true).with_filter(default_filter(level)).boxed()
    }
}

fn file_layer(appender: RollingFileAppender, json: bool, level: Level) -> BoxedLayer {
    if json {
        fmt::layer()
            .json().with_writer(appender).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .with_filter(default_filter(level)).boxed()
    } else {
        fmt::layer()
            .with_writer(appender).with_span_events(FmtSpan::CLOSE)
            .with_target(true).with_ansi(false)
            .with_filter(default_filter(level)).boxed()
    }
}

/// Initialize the logging system with the given configuration.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let mut layers = vec![stderr_layer(config.json_format, config.log_level)];
    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;
        let appender = RollingFileAppender::new(config.rotation, log_dir, LOG_FILENAME);
        layers.push(file_layer(appender, config.json_format, config.log_level));
    }
    tracing_subscriber::registry()
        .with(layers).with(ErrorLayer::default()).try_init()?;
    Ok(())
}

/// Parse rotation period from string.
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Parse a log level, falling back to INFO.
pub fn parse_level(s: &str) -> Level {
    s.parse().unwrap_or(Level::INFO)
}
