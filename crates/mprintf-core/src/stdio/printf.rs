//! printf formatting engine.
//!
//! A deliberately small interpreter for the printf dialect used on the
//! target firmware: `%c %s %p %o %x %X %d %i %u %f`, optional decimal width
//! and `.precision`, and the flag bytes `+ - # *` plus the `l` modifier,
//! which are accepted and ignored.
//!
//! Design invariant: output goes through a [`BoundedWriter`], so no input
//! can make the engine write at or past the destination's capacity. The
//! 24-byte slack checked before each top-level format byte covers unpadded
//! numbers; a rendering widened past the free space loses bytes, and the
//! writer then finishes with the truncation marker and the full capacity.

use super::args::{ArgCursor, FormatArg};
use super::buffer::BoundedWriter;
use crate::stdlib::conversion::{NumBuf, dtostrf, ltoa_w, ultoa, ultoa_w};

/// Rendered in place of a null `%s` argument.
pub const NULL_STR: &[u8] = b"<NULL>";

// ---------------------------------------------------------------------------
// Format spec types
// ---------------------------------------------------------------------------

/// A parsed conversion specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Minimum field width; 0 means unspecified.
    pub width: i8,
    /// Digits after the decimal point; -1 means unspecified.
    pub precision: i8,
    /// Byte the parser stopped on. Not consumed.
    pub conversion: u8,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            width: 0,
            precision: -1,
            conversion: 0,
        }
    }
}

/// Read position inside a format string.
///
/// The string ends at its first NUL byte or at the end of the slice; past
/// that point [`peek`](Self::peek) keeps returning 0.
#[derive(Debug, Clone)]
pub struct FormatCursor<'f> {
    fmt: &'f [u8],
    pos: usize,
}

impl<'f> FormatCursor<'f> {
    #[must_use]
    pub fn new(fmt: &'f [u8]) -> Self {
        Self { fmt, pos: 0 }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current byte, or 0 at the end.
    #[must_use]
    pub fn peek(&self) -> u8 {
        self.fmt.get(self.pos).copied().unwrap_or(0)
    }

    pub fn bump(&mut self) {
        self.pos = (self.pos + 1).min(self.fmt.len());
    }

    /// Step back one byte. Only used when a `%` is the last byte.
    pub fn back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse the specifier body following a `%`.
///
/// `cursor` must sit on the first byte after the `%`. Flag bytes are
/// skipped, width and precision digits are read, and the cursor is left on
/// the conversion byte, which is copied into the result but not consumed.
///
/// A `.precision` group may be followed by more flags and another
/// width/precision group; later values overwrite earlier ones.
///
/// Digit runs accumulate with wrapping 8-bit arithmetic, so widths above
/// 127 wrap around instead of being rejected.
pub fn parse_format_spec(cursor: &mut FormatCursor<'_>) -> FormatSpec {
    let mut spec = FormatSpec::default();

    loop {
        while matches!(cursor.peek(), b'+' | b'-' | b'#' | b'*' | b'l') {
            cursor.bump();
        }

        if cursor.peek().is_ascii_digit() {
            spec.width = skip_atoi(cursor);
        }

        if cursor.peek() != b'.' {
            break;
        }
        cursor.bump();
        if cursor.peek().is_ascii_digit() {
            spec.precision = skip_atoi(cursor);
        }
    }

    spec.conversion = cursor.peek();
    spec
}

fn skip_atoi(cursor: &mut FormatCursor<'_>) -> i8 {
    let mut value: i8 = 0;
    while cursor.peek().is_ascii_digit() {
        let digit = (cursor.peek() - b'0') as i8;
        value = value.wrapping_mul(10).wrapping_add(digit);
        cursor.bump();
    }
    value
}

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Format `fmt` with `args` into `out`.
///
/// Returns the number of bytes written (terminator excluded), or the
/// writer's full capacity if the overflow guard fired. The output is always
/// NUL-terminated when the capacity is non-zero.
pub fn format_into(out: &mut BoundedWriter<'_>, fmt: &[u8], args: &[FormatArg<'_>]) -> usize {
    let mut cursor = FormatCursor::new(fmt);
    let mut args = ArgCursor::new(args);
    let mut scratch = NumBuf::new();

    while cursor.peek() != 0 {
        if !out.has_slack() {
            return out.truncate();
        }

        let byte = cursor.peek();
        if byte == b'%' {
            cursor.bump();
            let spec = parse_format_spec(&mut cursor);
            render_spec(out, &mut cursor, &spec, &mut args, &mut scratch);
        } else {
            out.push(byte);
        }
        cursor.bump();
    }

    out.finish()
}

fn render_spec(
    out: &mut BoundedWriter<'_>,
    cursor: &mut FormatCursor<'_>,
    spec: &FormatSpec,
    args: &mut ArgCursor<'_, '_>,
    scratch: &mut NumBuf,
) {
    let (base, signed) = match spec.conversion {
        b'c' => {
            out.push(args.next_int() as u8);
            return;
        }
        b's' => {
            render_str(out, args.next_str());
            return;
        }
        b'p' => {
            out.extend(ultoa(args.next_pointer() as u64, 16, scratch));
            return;
        }
        b'f' => {
            out.extend(dtostrf(
                args.next_float(),
                spec.width,
                spec.precision,
                scratch,
            ));
            return;
        }
        b'o' => (8, false),
        b'x' | b'X' => {
            out.extend(b"0x");
            (16, false)
        }
        b'd' | b'i' => (10, true),
        b'u' => (10, false),
        other => {
            // Unknown conversion: keep it visible as literal text.
            if other != b'%' {
                out.push(b'%');
            }
            if other != 0 {
                out.push(other);
            } else {
                cursor.back();
            }
            return;
        }
    };

    let digits = if signed {
        ltoa_w(i64::from(args.next_int()), base, spec.width, scratch)
    } else {
        ultoa_w(u64::from(args.next_uint()), base, spec.width, scratch)
    };
    out.extend(digits);
}

fn render_str(out: &mut BoundedWriter<'_>, arg: Option<&[u8]>) {
    let Some(s) = arg else {
        out.extend(NULL_STR);
        return;
    };
    for &b in s {
        if b == 0 || !out.has_loose_slack() {
            break;
        }
        out.push(b);
    }
}

/// Format into `buf`, whose length is the capacity.
///
/// Returns the length of the NUL-terminated result, or `buf.len()` when the
/// output was truncated and ends in `(...)`. A result that fills the buffer
/// exactly cannot be told apart from a truncated one by the return value
/// alone; use [`format_into`] with a [`BoundedWriter`] and check
/// [`BoundedWriter::is_truncated`] when that matters.
pub fn m_vsnprintf(buf: &mut [u8], fmt: &[u8], args: &[FormatArg<'_>]) -> usize {
    let mut out = BoundedWriter::new(buf);
    format_into(&mut out, fmt, args)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
