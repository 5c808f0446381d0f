//! Convenience macros that build the typed argument slice.
//!
//! Every argument goes through `FormatArg::from`, so anything with a `From`
//! conversion (integers, floats, `char`, strings, raw pointers) can be passed
//! directly.
//!
//! ```
//! let mut buf = [0u8; 32];
//! let n = mprintf_core::m_snprintf!(&mut buf, "x=%d", 42);
//! assert_eq!(&buf[..n], b"x=42");
//! ```

/// Format into a byte buffer; see [`m_vsnprintf`](crate::stdio::m_vsnprintf).
#[macro_export]
macro_rules! m_snprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::m_vsnprintf(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::stdio::FormatArg::from($arg)),*],
        )
    };
}

/// Format and stream through a [`Printer`](crate::stdio::Printer).
/// Evaluates to 0 when the printer has no sink.
#[macro_export]
macro_rules! m_printf {
    ($printer:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $printer.printf(
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::stdio::FormatArg::from($arg)),*],
        )
    };
}
