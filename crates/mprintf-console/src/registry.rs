//! Process-wide printer registry.
//!
//! Holds the one replaceable printer callback shared by every console
//! call. Until [`set_printer`] is called the printer is the transmit
//! primitive selected by [`console_config`](crate::config::console_config).
//! The lock is held only long enough to copy the callback out, so a
//! printer may itself re-register without deadlocking.

use parking_lot::RwLock;

use mprintf_core::{BoundedWriter, FormatArg, MPRINTF_BUF_SIZE, Status, format_into};
use mprintf_core::stdio::emit;

use crate::config::{SinkKind, console_config};
use crate::metrics::{ConsoleMetrics, global_metrics};
use crate::sink::{stderr_tx, stdout_tx};

/// Printer callback: `(channel, byte) -> status`.
pub type PrinterFn = fn(u8, u8) -> Status;

#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Platform default from configuration.
    Platform,
    Custom(PrinterFn),
    Disabled,
}

static PRINTER: RwLock<Slot> = RwLock::new(Slot::Platform);

/// Replace the printer. `None` disables console output.
pub fn set_printer(printer: Option<PrinterFn>) {
    *PRINTER.write() = match printer {
        Some(f) => Slot::Custom(f),
        None => Slot::Disabled,
    };
}

/// Restore the configured platform default.
pub fn reset_printer() {
    *PRINTER.write() = Slot::Platform;
}

/// The printer console calls would use right now.
#[must_use]
pub fn current_printer() -> Option<PrinterFn> {
    match *PRINTER.read() {
        Slot::Custom(f) => Some(f),
        Slot::Disabled => None,
        Slot::Platform => match console_config().sink {
            SinkKind::Stdout => Some(stdout_tx as PrinterFn),
            SinkKind::Stderr => Some(stderr_tx as PrinterFn),
            SinkKind::Null => None,
        },
    }
}

/// Format and stream through the registered printer.
///
/// Returns the number of bytes handed to the printer, or 0 without
/// formatting when no printer is registered.
pub fn printf(fmt: &[u8], args: &[FormatArg<'_>]) -> usize {
    let metrics = global_metrics();
    let Some(mut printer) = current_printer() else {
        ConsoleMetrics::inc(&metrics.skipped);
        return 0;
    };
    ConsoleMetrics::inc(&metrics.calls);

    let mut staging = [0u8; MPRINTF_BUF_SIZE];
    let mut writer = BoundedWriter::new(&mut staging);
    format_into(&mut writer, fmt, args);
    if writer.is_truncated() {
        ConsoleMetrics::inc(&metrics.truncations);
    }

    let n = emit(&mut printer, console_config().channel, &staging);
    ConsoleMetrics::add(&metrics.bytes_emitted, n as u64);
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Tests share the global slot.
    static SERIAL: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
    static SEEN: AtomicUsize = AtomicUsize::new(0);

    fn counting(_: u8, _: u8) -> Status {
        SEEN.fetch_add(1, Ordering::Relaxed);
        Status::Ok
    }

    #[test]
    fn test_custom_printer_receives_output() {
        let _guard = SERIAL.lock();
        SEEN.store(0, Ordering::Relaxed);
        set_printer(Some(counting));
        let n = printf(b"id=%u", &[FormatArg::from(42u32)]);
        assert_eq!(n, 5);
        assert_eq!(SEEN.load(Ordering::Relaxed), 5);
        reset_printer();
    }

    #[test]
    fn test_disabled_printer_skips_work() {
        let _guard = SERIAL.lock();
        SEEN.store(0, Ordering::Relaxed);
        set_printer(None);
        assert!(current_printer().is_none());
        let before = global_metrics().snapshot().skipped;
        assert_eq!(printf(b"dropped %d", &[FormatArg::from(1)]), 0);
        assert_eq!(SEEN.load(Ordering::Relaxed), 0);
        assert!(global_metrics().snapshot().skipped > before);
        reset_printer();
    }

    #[test]
    fn test_overlong_output_counts_a_truncation() {
        let _guard = SERIAL.lock();
        set_printer(Some(counting));
        let before = global_metrics().snapshot().truncations;
        let fmt = [b'w'; 400];
        let n = printf(&fmt, &[]);
        assert_eq!(n, MPRINTF_BUF_SIZE - 23 + 5);
        assert!(global_metrics().snapshot().truncations > before);
        reset_printer();
    }
}
