//! Logging System
//!
//! Structured logging using the `tracing` crate. Events go to stderr so the
//! operator sees warnings and the completion notice without them mixing into
//! anything a caller pipes from stdout.

use crate::error::SummaryError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the configured filter, e.g.
/// `PROJECT_SUMMARY_LOG=project_summary=trace`.
pub const LOG_ENV_VAR: &str = "PROJECT_SUMMARY_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system
///
/// The `PROJECT_SUMMARY_LOG` filter wins over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SummaryError> {
    let filter = build_env_filter(config)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| SummaryError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build the filter from the environment or the configured level
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, SummaryError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    parse_level(&config.level)
}

fn parse_level(level: &str) -> Result<EnvFilter, SummaryError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(EnvFilter::new(level)),
        other => Err(SummaryError::ConfigError(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
            other
        ))),
    }
}
