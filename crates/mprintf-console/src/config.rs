//! Console configuration.
//!
//! Read from the environment on first use and cached thereafter:
//! - `MPRINTF_SINK`: default transmit primitive. `stdout` (default),
//!   `stderr`, or `null` (no default printer; console calls are no-ops
//!   until one is registered).
//! - `MPRINTF_CHANNEL`: channel id handed to the printer (default 0).

use std::sync::OnceLock;

use crate::error::ConsoleError;

/// Default transmit primitive used until a printer is registered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    Null,
}

impl SinkKind {
    /// Parse from string (case-insensitive); unknown values fall back to
    /// the default.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Strict parse.
    pub fn parse(s: &str) -> Result<Self, ConsoleError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" | "uart" | "uart0" | "default" => Ok(Self::Stdout),
            "stderr" | "uart1" => Ok(Self::Stderr),
            "null" | "none" | "off" | "disabled" => Ok(Self::Null),
            _ => Err(ConsoleError::UnknownSink {
                value: s.to_string(),
            }),
        }
    }
}

/// Strict channel parse.
pub fn parse_channel(s: &str) -> Result<u8, ConsoleError> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| ConsoleError::InvalidChannel {
            value: s.to_string(),
        })
}

/// Resolved console settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub sink: SinkKind,
    pub channel: u8,
}

impl ConsoleConfig {
    /// Build from raw values; unparseable values fall back to defaults.
    #[must_use]
    pub fn from_values(sink: Option<&str>, channel: Option<&str>) -> Self {
        Self {
            sink: sink.map(SinkKind::from_str_loose).unwrap_or_default(),
            channel: channel.and_then(|c| parse_channel(c).ok()).unwrap_or(0),
        }
    }

    fn from_env() -> Self {
        let sink = std::env::var("MPRINTF_SINK").ok();
        let channel = std::env::var("MPRINTF_CHANNEL").ok();
        Self::from_values(sink.as_deref(), channel.as_deref())
    }
}

static GLOBAL_CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();

/// Get the console configuration (reads env vars on first call).
#[must_use]
pub fn console_config() -> ConsoleConfig {
    *GLOBAL_CONFIG.get_or_init(ConsoleConfig::from_env)
}
