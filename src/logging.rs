// src/logging.rs

//! Logging setup for applications using `must`, via `tracing` +
//! `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. explicit level passed to [`init_logging`]
//! 2. `MUST_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR, the same stream `ExitController` reports on.

use anyhow::anyhow;
use tracing_subscriber::fmt;

use crate::errors::Result;

/// Environment variable consulted when no explicit level is given.
pub const LOG_ENV_VAR: &str = "MUST_LOG";

/// Initialise the global logging subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Option<tracing::Level>) -> Result<()> {
    let level = level.unwrap_or_else(level_from_env);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn level_from_env() -> tracing::Level {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::INFO)
}

/// Parse a level name as accepted by `MUST_LOG`.
pub fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
