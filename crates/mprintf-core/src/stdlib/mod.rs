//! Numeric conversion helpers used by the formatter.

pub mod conversion;

pub use conversion::{NUM_BUF_SIZE, NumBuf, dtostrf, ltoa_w, ultoa, ultoa_w};
