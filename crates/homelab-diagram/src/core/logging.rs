//! Logging setup
//!
//! Structured logging through `tracing`, with output produced by
//! `tracing-subscriber`. Log lines always go to stderr: stdout is reserved for
//! diagram text, which consumers expect byte-for-byte.
//!
//! # Usage
//!
//! ```rust
//! use homelab_diagram::core::logging::init_logging;
//!
//! // Level and format from the environment, or info/compact
//! let _ = init_logging(None, None);
//! ```
//!
//! # Environment Variables
//!
//! - `HOMELAB_DIAGRAM_LOG_LEVEL`: trace|debug|info|warn|error|off
//! - `RUST_LOG`: standard `tracing-subscriber` filter, also accepted
//! - `HOMELAB_DIAGRAM_LOG_FORMAT`: compact|pretty|json
//!
//! # Filtering Logs
//!
//! ```bash
//! RUST_LOG="homelab_diagram_cli=debug" homelab-diagram show --variant summary
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable consulted for the log level
pub const LOG_LEVEL_ENV: &str = "HOMELAB_DIAGRAM_LOG_LEVEL";

/// Environment variable consulted for the log format
pub const LOG_FORMAT_ENV: &str = "HOMELAB_DIAGRAM_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the global tracing subscriber
///
/// * `level` - trace|debug|info|warn|error|off. Falls back to
///   `HOMELAB_DIAGRAM_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// * `format` - compact|pretty|json. Falls back to
///   `HOMELAB_DIAGRAM_LOG_FORMAT`, then `compact`.
///
/// Fails on an unknown format or when a global subscriber is already set.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
        .unwrap_or_else(|| "compact".to_string());

    // The level is fully resolved above; RUST_LOG must not override it.
    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_file(false)
                        .with_line_number(false)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging from the environment, or info/compact
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
