//! Formatted output.
//!
//! Buffer mode ([`m_vsnprintf`]), streaming mode ([`m_vprintf`],
//! [`Printer`]), and the pieces they share: the typed argument list and the
//! bounded writer.

pub mod args;
pub mod buffer;
pub mod output;
pub mod printf;

pub use args::{ArgCursor, FormatArg};
pub use buffer::{BoundedWriter, OVERFLOW_GUARD, TRUNCATION_MARKER};
pub use output::{ByteSink, MPRINTF_BUF_SIZE, Printer, Status, emit, m_vprintf};
pub use printf::{FormatSpec, format_into, m_vsnprintf};
