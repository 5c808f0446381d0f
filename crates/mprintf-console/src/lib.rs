//! # mprintf-console
//!
//! Process-wide console printing on top of `mprintf-core`.
//!
//! A single replaceable printer callback receives every formatted byte.
//! It defaults to a host transmit primitive (stdout unless configured
//! otherwise) and can be swapped or disabled at runtime with
//! [`set_printer`].

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod sink;

pub use config::{ConsoleConfig, SinkKind, console_config, parse_channel};
pub use error::ConsoleError;
pub use metrics::{ConsoleMetrics, MetricsSnapshot, global_metrics};
pub use registry::{PrinterFn, current_printer, printf, reset_printer, set_printer};
pub use sink::{IoSink, stderr_tx, stdout_tx};

#[doc(hidden)]
pub use mprintf_core as __core;

/// Format and stream through the registered console printer.
///
/// ```
/// mprintf_console::set_printer(None);
/// assert_eq!(mprintf_console::console_printf!("n=%d\n", 3), 0);
/// ```
#[macro_export]
macro_rules! console_printf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf(
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::__core::FormatArg::from($arg)),*],
        )
    };
}
