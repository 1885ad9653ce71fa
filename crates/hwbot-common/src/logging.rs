//! Structured logging infrastructure for the bot.
//!
//! Events go to stdout and, when a file path is configured, to an append-only
//! log file. Every line carries a timestamp, the level, the target (logger
//! name) and the message.

use crate::error::{PollError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: debug for the bot crates, info for everything else.
pub const DEFAULT_LOG_LEVEL: &str = "info,hwbot=debug,hwbot_practicum=debug,hwbot_telegram=debug";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "bot.log";

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter in `EnvFilter` syntax (e.g. "info", "hwbot=debug")
    pub level: String,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to mirror events to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            include_targets: true,
            stdout: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| PollError::config(format!("invalid log filter: {e}")))?;

    let (file_layer, guard) = match &config.file_path {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(config.include_targets);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = config
        .stdout
        .then(|| fmt::layer().with_target(config.include_targets));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PollError::config(format!("failed to install tracing subscriber: {e}")))?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path.file_name().ok_or_else(|| {
        PollError::config(format!("log path {} has no file name", path.display()))
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir.to_path_buf(), PathBuf::from(file_name)))
}
