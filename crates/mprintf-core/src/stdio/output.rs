//! Streaming output: format into a staging buffer, then push the result
//! through a byte sink one byte at a time.

use super::args::FormatArg;
use super::printf::m_vsnprintf;

/// Size of the stack staging buffer used by streaming calls.
pub const MPRINTF_BUF_SIZE: usize = 256;

/// Status reported by a sink for one byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Byte accepted.
    #[default]
    Ok,
    /// Transmit failed.
    Fail,
    /// Accepted, still in flight.
    Pending,
    /// Transmitter busy; the byte was not taken.
    Busy,
    /// Transmit aborted.
    Cancel,
}

/// Consumer of single output bytes, e.g. a UART transmitter.
pub trait ByteSink {
    /// Transmit `byte` on `channel`.
    fn put(&mut self, channel: u8, byte: u8) -> Status;
}

impl<F> ByteSink for F
where
    F: FnMut(u8, u8) -> Status,
{
    fn put(&mut self, channel: u8, byte: u8) -> Status {
        self(channel, byte)
    }
}

/// Feed `bytes` to `sink` up to the first NUL and return how many were fed.
///
/// Sink status is not acted on: a failed byte still counts as emitted.
pub fn emit<S: ByteSink + ?Sized>(sink: &mut S, channel: u8, bytes: &[u8]) -> usize {
    let mut n = 0;
    for &b in bytes {
        if b == 0 {
            break;
        }
        let _ = sink.put(channel, b);
        n += 1;
    }
    n
}

/// Format into a [`MPRINTF_BUF_SIZE`] staging buffer and stream the result.
///
/// Output that does not fit the staging buffer is truncated with `(...)`
/// exactly as in buffer mode. Returns the number of bytes streamed.
pub fn m_vprintf<S: ByteSink + ?Sized>(
    sink: &mut S,
    channel: u8,
    fmt: &[u8],
    args: &[FormatArg<'_>],
) -> usize {
    let mut staging = [0u8; MPRINTF_BUF_SIZE];
    m_vsnprintf(&mut staging, fmt, args);
    emit(sink, channel, &staging)
}

/// Holder for a replaceable sink.
///
/// With no sink installed, [`printf`](Self::printf) returns 0 without
/// formatting anything.
#[derive(Debug)]
pub struct Printer<S> {
    sink: Option<S>,
    channel: u8,
}

impl<S> Printer<S> {
    /// A printer with no sink, transmitting on channel 0 once one is set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sink: None,
            channel: 0,
        }
    }

    #[must_use]
    pub const fn with_sink(sink: S) -> Self {
        Self {
            sink: Some(sink),
            channel: 0,
        }
    }

    /// Select the channel id handed to the sink.
    #[must_use]
    pub const fn on_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Install `sink`, returning the one it replaces.
    pub fn set_sink(&mut self, sink: S) -> Option<S> {
        self.sink.replace(sink)
    }

    /// Remove the sink; later calls become no-ops.
    pub fn clear_sink(&mut self) -> Option<S> {
        self.sink.take()
    }

    #[must_use]
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }
}

impl<S: ByteSink> Printer<S> {
    /// Format and stream through the installed sink.
    pub fn printf(&mut self, fmt: &[u8], args: &[FormatArg<'_>]) -> usize {
        match self.sink.as_mut() {
            Some(sink) => m_vprintf(sink, self.channel, fmt, args),
            None => 0,
        }
    }
}

impl<S> Default for Printer<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what it receives into a fixed array.
    struct Capture {
        bytes: [u8; MPRINTF_BUF_SIZE],
        len: usize,
        channel: Option<u8>,
    }

    impl Capture {
        fn new() -> Self {
            Self {
                bytes: [0; MPRINTF_BUF_SIZE],
                len: 0,
                channel: None,
            }
        }

        fn as_bytes(&self) -> &[u8] {
            &self.bytes[..self.len]
        }
    }

    impl ByteSink for Capture {
        fn put(&mut self, channel: u8, byte: u8) -> Status {
            self.channel = Some(channel);
            self.bytes[self.len] = byte;
            self.len += 1;
            Status::Ok
        }
    }

    #[test]
    fn test_stream_feeds_bytes_in_order() {
        let mut sink = Capture::new();
        let n = m_vprintf(&mut sink, 1, b"v=%d", &[FormatArg::from(12)]);
        assert_eq!(n, 4);
        assert_eq!(sink.as_bytes(), b"v=12");
        assert_eq!(sink.channel, Some(1));
    }

    #[test]
    fn test_stream_stops_at_embedded_nul() {
        let mut sink = Capture::new();
        let n = m_vprintf(&mut sink, 0, b"a%cb", &[FormatArg::Char(0)]);
        assert_eq!(n, 1);
        assert_eq!(sink.as_bytes(), b"a");
    }

    #[test]
    fn test_stream_truncates_at_staging_size() {
        let mut sink = Capture::new();
        let fmt = [b'z'; 300];
        let n = m_vprintf(&mut sink, 0, &fmt, &[]);
        assert_eq!(n, MPRINTF_BUF_SIZE - 23 + 5);
        assert!(sink.as_bytes().ends_with(b"z(...)"));
    }

    #[test]
    fn test_failing_sink_still_counts() {
        let mut calls = 0;
        let mut sink = |_: u8, _: u8| {
            calls += 1;
            Status::Fail
        };
        assert_eq!(m_vprintf(&mut sink, 0, b"abc", &[]), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_printer_without_sink_does_nothing() {
        let mut printer: Printer<Capture> = Printer::new();
        assert!(!printer.has_sink());
        assert_eq!(printer.printf(b"hello %s", &[FormatArg::from("x")]), 0);
    }

    #[test]
    fn test_printer_sink_is_replaceable() {
        let mut printer = Printer::with_sink(Capture::new()).on_channel(2);
        assert_eq!(printer.printf(b"one", &[]), 3);

        let old = printer.set_sink(Capture::new());
        assert_eq!(old.map(|c| c.len), Some(3));
        assert_eq!(printer.printf(b"two!", &[]), 4);
        assert_eq!(printer.sink().map(Capture::as_bytes), Some(&b"two!"[..]));
        assert_eq!(printer.sink().and_then(|c| c.channel), Some(2));

        printer.clear_sink();
        assert_eq!(printer.printf(b"three", &[]), 0);
    }
}
