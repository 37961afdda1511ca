//! Logger initialization built on tracing-subscriber.
//!
//! The core catalog never logs its own errors; everything here is
//! observability layered over it: request logs from the middleware and
//! lifecycle logs from the server.

use std::str::FromStr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Shorter single-line format
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                other
            )),
        }
    }
}

/// Initializes the global tracing subscriber from logger settings.
///
/// The level acts as a default directive; `RUST_LOG` style directives in
/// the level string are honored by the env filter.
///
/// # Errors
/// Fails when the level does not parse or a subscriber is already set.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let format = settings
        .format
        .parse::<LogFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;
    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    match format {
        LogFormat::Full => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?,
        LogFormat::Compact => builder
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?,
    }

    Ok(())
}
