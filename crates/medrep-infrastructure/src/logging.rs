//! Structured logging with tracing
//!
//! Configures the global subscriber: an env filter, human or JSON output on
//! stderr, and an optional daily-rolling log file.

use crate::constants::LOG_FILTER_ENV;
use crate::error_ext::ErrorContext;
use medrep_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Install the global subscriber described by `config`
///
/// Fails when the level is unknown or a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // stdout belongs to command output
    let console = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let console = if config.json_format {
        console.json().with_file(true).with_line_number(true).boxed()
    } else {
        console.boxed()
    };

    let file = config.file_output.as_deref().map(|path| {
        let layer = fmt::layer().with_writer(session_log(path)).with_ansi(false);
        if config.json_format {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("Failed to install log subscriber")?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

/// Daily-rolling appender next to `path`, named after its stem
fn session_log(path: &Path) -> RollingFileAppender {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path.file_stem().unwrap_or_else(|| OsStr::new("medrep"));
    rolling::daily(directory, prefix)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            ),
            source: None,
        }),
    }
}

/// Record whether a configuration file was merged
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration file loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found");
    }
}
