//! Host transmit primitives.
//!
//! On a device the default printer writes to UART0. On a host the
//! equivalent is a byte written to stdout or stderr; the channel id is
//! accepted and ignored.

use std::io::Write;

use mprintf_core::{ByteSink, Status};

use crate::error::ConsoleError;

/// Default printer writing one byte to stdout.
pub fn stdout_tx(_channel: u8, byte: u8) -> Status {
    match std::io::stdout().lock().write_all(&[byte]) {
        Ok(()) => Status::Ok,
        Err(_) => Status::Fail,
    }
}

/// Default printer writing one byte to stderr.
pub fn stderr_tx(_channel: u8, byte: u8) -> Status {
    match std::io::stderr().lock().write_all(&[byte]) {
        Ok(()) => Status::Ok,
        Err(_) => Status::Fail,
    }
}

/// [`ByteSink`] over any [`Write`] implementor.
///
/// The first write error is kept and every later byte reports
/// [`Status::Fail`]; [`finish`](Self::finish) surfaces it.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Flush and return the writer, or the first error seen.
    pub fn finish(mut self) -> Result<W, ConsoleError> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn put(&mut self, _channel: u8, byte: u8) -> Status {
        if self.error.is_some() {
            return Status::Fail;
        }
        match self.inner.write_all(&[byte]) {
            Ok(()) => Status::Ok,
            Err(err) => {
                self.error = Some(err);
                Status::Fail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mprintf_core::{FormatArg, m_vprintf};

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("wire cut"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_sink_collects_bytes() {
        let mut sink = IoSink::new(Vec::new());
        let n = m_vprintf(&mut sink, 0, b"t=%d C", &[FormatArg::from(21)]);
        assert_eq!(n, 6);
        assert_eq!(sink.finish().unwrap(), b"t=21 C");
    }

    #[test]
    fn test_io_sink_reports_first_error() {
        let mut sink = IoSink::new(Broken);
        assert_eq!(sink.put(0, b'a'), Status::Fail);
        assert_eq!(sink.put(0, b'b'), Status::Fail);
        assert!(matches!(sink.finish(), Err(ConsoleError::Io(_))));
    }
}
