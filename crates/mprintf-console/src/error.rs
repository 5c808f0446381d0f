//! Console error types.

/// Errors raised by console configuration and host transmit sinks.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("invalid channel id '{value}': expected 0..=255")]
    InvalidChannel { value: String },
    #[error("unknown sink '{value}': expected stdout|stderr|null")]
    UnknownSink { value: String },
    #[error("transmit failed: {0}")]
    Io(#[from] std::io::Error),
}
