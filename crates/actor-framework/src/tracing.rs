//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for a process built on
//! the framework.
//!
//! Every actor logs with an `entity_type` field instead of a module path, so the
//! subscriber hides targets (`with_target(false)`). Verbosity comes from `RUST_LOG`
//! and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                    # full payloads of every request
//! RUST_LOG=actor_framework=debug cargo run    # framework internals only
//! ```
//!
//! With `RUST_LOG=info` an order placement reads:
//!
//! ```text
//! INFO create_order: Sending create_order to ledger
//! INFO Action ok entity_type="Table" id=table_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! [`LogFormat::Json`] switches to one JSON object per line for log shippers.

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines with spans inline.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_formats() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Compact ".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
