//! Process configuration.

use actor_framework::tracing::LogFormat;
use std::net::SocketAddr;

/// Everything the binary needs to start, read from the environment.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 3000 | HTTP port |
/// | HOST | 0.0.0.0 | HTTP bind address |
/// | LOG_FORMAT | compact | `compact` or `json` |
/// | POS_STRICT_TOTALS | false | reject orders whose total differs from their lines |
/// | POS_SEED_DEMO_DATA | true | boot with the demo menu, tables and staff |
/// | POS_CHANNEL_BUFFER | 32 | request buffer per actor |
///
/// ```ignore
/// PORT=8080 POS_STRICT_TOTALS=true cargo run
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub strict_totals: bool,
    pub seed_demo_data: bool,
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            log_format: LogFormat::Compact,
            strict_totals: false,
            seed_demo_data: true,
            channel_buffer: 32,
        }
    }
}

fn var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: var("PORT").unwrap_or(defaults.port),
            log_format: var("LOG_FORMAT").unwrap_or(defaults.log_format),
            strict_totals: var("POS_STRICT_TOTALS").unwrap_or(defaults.strict_totals),
            seed_demo_data: var("POS_SEED_DEMO_DATA").unwrap_or(defaults.seed_demo_data),
            channel_buffer: var::<usize>("POS_CHANNEL_BUFFER")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.channel_buffer),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
