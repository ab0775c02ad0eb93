//! Structured logging setup

use crate::error::LmsResult;
use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include file and line information
    pub include_location: bool,
    /// Whether to include thread information
    pub include_thread: bool,
    /// Append logs to this file instead of stdout
    pub log_file_path: Option<String>,
    /// Extra filter directives, e.g. `tower_http=debug`
    pub filter_directives: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            log_file_path: None,
            filter_directives: vec!["lms_core=debug".to_string(), "lms_web=debug".to_string()],
        }
    }
}

impl LoggingConfig {
    /// Build the env filter; `RUST_LOG` wins over the configured level
    pub fn env_filter(&self) -> LmsResult<EnvFilter> {
        let mut filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        for directive in &self.filter_directives {
            let directive = directive.parse().map_err(|e| {
                crate::config_error!(
                    format!("Invalid log directive '{}'", directive),
                    "logging",
                    e
                )
            })?;
            filter = filter.add_directive(directive);
        }

        Ok(filter)
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> LmsResult<()> {
    let filter = config.env_filter()?;

    let writer = match &config.log_file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            fmt::writer::BoxMakeWriter::new(file)
        }
        None => fmt::writer::BoxMakeWriter::new(io::stdout),
    };

    let base = fmt::layer()
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_thread_ids(config.include_thread)
        .with_thread_names(config.include_thread)
        .with_writer(writer);

    let layer = match config.format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Compact => base.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| crate::config_error!("Logging already initialized", "logging", e))
}
