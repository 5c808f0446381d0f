//! Number-to-text conversions (ultoa, ltoa, dtostrf).
//!
//! Every routine renders into a caller-owned [`NumBuf`] and returns the
//! rendered bytes. Nothing here allocates, and nothing can write past the
//! scratch buffer: bytes that would not fit are dropped.

/// Size of the numeric scratch buffer, in bytes.
pub const NUM_BUF_SIZE: usize = 24;

/// Fraction digits used by `dtostrf` when no precision is given.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Upper bound on fraction digits rendered by `dtostrf`.
pub const MAX_FLOAT_PRECISION: usize = 9;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 2^64 as f64; anything at or above it cannot be split into a `u64` part.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

// ---------------------------------------------------------------------------
// Scratch buffer
// ---------------------------------------------------------------------------

/// Fixed-size stack buffer holding the text of one rendered number.
///
/// Invariant: `len <= NUM_BUF_SIZE`.
#[derive(Debug, Clone)]
pub struct NumBuf {
    bytes: [u8; NUM_BUF_SIZE],
    len: usize,
}

impl NumBuf {
    /// Create an empty scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; NUM_BUF_SIZE],
            len: 0,
        }
    }

    /// Discard the current contents.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Rendered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, byte: u8) {
        if self.len < NUM_BUF_SIZE {
            self.bytes[self.len] = byte;
            self.len += 1;
        }
    }

    fn push_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// Right-align the contents in a field of `width` bytes using `pad`.
    /// Non-positive widths leave the contents alone.
    fn pad_left(&mut self, width: i8, pad: u8) {
        if width <= 0 {
            return;
        }
        let target = (width as usize).min(NUM_BUF_SIZE);
        if target <= self.len {
            return;
        }
        let shift = target - self.len;
        self.bytes.copy_within(0..self.len, shift);
        self.bytes[..shift].fill(pad);
        self.len = target;
    }
}

impl Default for NumBuf {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Integer rendering
// ---------------------------------------------------------------------------

/// Render `value` in `base` (clamped to 2..=36) with no padding.
pub fn ultoa(value: u64, base: u32, scratch: &mut NumBuf) -> &[u8] {
    ultoa_w(value, base, 0, scratch)
}

/// Render `value` in `base`, right-aligned with spaces to `width`.
pub fn ultoa_w(value: u64, base: u32, width: i8, scratch: &mut NumBuf) -> &[u8] {
    scratch.clear();
    push_digits(scratch, value, base);
    scratch.pad_left(width, b' ');
    scratch.as_bytes()
}

/// Signed variant of [`ultoa_w`]. The `-` sign counts toward `width`.
pub fn ltoa_w(value: i64, base: u32, width: i8, scratch: &mut NumBuf) -> &[u8] {
    scratch.clear();
    if value < 0 {
        scratch.push(b'-');
    }
    push_digits(scratch, value.unsigned_abs(), base);
    scratch.pad_left(width, b' ');
    scratch.as_bytes()
}

fn push_digits(scratch: &mut NumBuf, mut value: u64, base: u32) {
    let base = u64::from(base.clamp(2, 36));
    // Base 2 of u64::MAX is the longest case.
    let mut rev = [0u8; 64];
    let mut count = 0;
    loop {
        rev[count] = DIGITS[(value % base) as usize];
        count += 1;
        value /= base;
        if value == 0 {
            break;
        }
    }
    for &d in rev[..count].iter().rev() {
        scratch.push(d);
    }
}

// ---------------------------------------------------------------------------
// Float rendering
// ---------------------------------------------------------------------------

/// Render `value` in fixed-point notation.
///
/// `precision` is the number of fraction digits (negative selects
/// [`DEFAULT_FLOAT_PRECISION`], values above [`MAX_FLOAT_PRECISION`] are
/// capped). The last digit is rounded half away from zero. The result is
/// right-aligned with spaces to `width`, the decimal point included.
///
/// Non-finite values render as `nan`, `inf` or `-inf`; magnitudes that do
/// not fit a `u64` integer part render as `ovf`.
///
/// # Limitations
///
/// The rendering lives in the [`NUM_BUF_SIZE`]-byte scratch buffer, so a
/// large value at high precision keeps only its first 24 bytes (the
/// trailing fraction digits are lost) whatever room the destination has.
pub fn dtostrf(value: f64, width: i8, precision: i8, scratch: &mut NumBuf) -> &[u8] {
    scratch.clear();

    if value.is_nan() {
        scratch.push_all(b"nan");
    } else if value.is_infinite() {
        if value < 0.0 {
            scratch.push(b'-');
        }
        scratch.push_all(b"inf");
    } else {
        let digits = if precision < 0 {
            DEFAULT_FLOAT_PRECISION
        } else {
            (precision as usize).min(MAX_FLOAT_PRECISION)
        };
        push_fixed(scratch, value, digits);
    }

    scratch.pad_left(width, b' ');
    scratch.as_bytes()
}

fn push_fixed(scratch: &mut NumBuf, value: f64, digits: usize) {
    let negative = value < 0.0;
    let mut magnitude = if negative { -value } else { value };

    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    magnitude += rounding;

    if magnitude >= U64_LIMIT {
        scratch.push_all(b"ovf");
        return;
    }

    if negative {
        scratch.push(b'-');
    }
    let int_part = magnitude as u64;
    push_digits(scratch, int_part, 10);

    if digits > 0 {
        scratch.push(b'.');
        let mut rem = magnitude - int_part as f64;
        for _ in 0..digits {
            rem *= 10.0;
            let d = (rem as u8).min(9);
            scratch.push(b'0' + d);
            rem -= f64::from(d);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
