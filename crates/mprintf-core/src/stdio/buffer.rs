//! Capacity-limited output writer.
//!
//! [`BoundedWriter`] is the single place where the output bound and the
//! truncation policy live. The interpreter asks it for slack before every
//! top-level format character; once fewer than [`OVERFLOW_GUARD`] bytes
//! remain it writes [`TRUNCATION_MARKER`] and the call reports the full
//! capacity.
//!
//! Invariants:
//! - `pos < buf.len()` whenever `buf` is non-empty (the last byte is kept
//!   for the NUL terminator), and `pos == 0` for an empty buffer.
//! - No byte is ever stored at an index `>= buf.len()`. A push that would
//!   land on the terminator slot is dropped and marks the writer as
//!   overflowed; [`finish`](BoundedWriter::finish) then truncates, so lost
//!   output always ends in the marker and reports the full capacity.

/// Minimum free space required before processing a top-level format byte.
pub const OVERFLOW_GUARD: usize = 24;

/// Text written in place of further output once the guard fires.
pub const TRUNCATION_MARKER: &[u8] = b"(...)";

/// Writer over a caller-supplied byte buffer.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    overflowed: bool,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Wrap `buf`; its length is the capacity.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            overflowed: false,
            truncated: false,
        }
    }

    /// Total capacity, terminator included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far (terminator excluded).
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Free space left, counted the way the guard counts it.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.pos)
    }

    /// Top-level guard: true while at least `OVERFLOW_GUARD` bytes remain.
    #[must_use]
    pub fn has_slack(&self) -> bool {
        self.remaining() >= OVERFLOW_GUARD
    }

    /// Per-byte guard used while copying `%s` arguments. Strictly looser
    /// bound than [`has_slack`](Self::has_slack) by one byte.
    #[must_use]
    pub fn has_loose_slack(&self) -> bool {
        self.remaining() > OVERFLOW_GUARD
    }

    /// Whether a push was dropped since the last truncation.
    #[must_use]
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Whether [`truncate`](Self::truncate) has run.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Append one byte. Dropped, and the writer marked overflowed, if it
    /// would occupy the terminator slot.
    pub fn push(&mut self, byte: u8) {
        if self.pos + 1 < self.buf.len() {
            self.buf[self.pos] = byte;
            self.pos += 1;
        } else {
            self.overflowed = true;
        }
    }

    /// Append every byte of `bytes` (each one subject to [`push`](Self::push)).
    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// NUL-terminate and return the number of bytes written.
    ///
    /// If any push was dropped this is [`truncate`](Self::truncate) instead.
    pub fn finish(&mut self) -> usize {
        if self.overflowed {
            return self.truncate();
        }
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }

    /// Write the truncation marker, NUL-terminate, and return the capacity.
    ///
    /// The marker normally lands at the current position. If that would not
    /// leave room for the whole marker plus the terminator, it is moved back
    /// so it ends just before the final byte. Buffers shorter than the
    /// marker get as much of it as fits.
    pub fn truncate(&mut self) -> usize {
        self.truncated = true;
        self.overflowed = false;
        let cap = self.buf.len();
        if cap == 0 {
            return 0;
        }
        let room = cap - 1;
        let marker_len = TRUNCATION_MARKER.len().min(room);
        let start = self.pos.min(room - marker_len);
        self.buf[start..start + marker_len].copy_from_slice(&TRUNCATION_MARKER[..marker_len]);
        self.pos = start + marker_len;
        self.buf[self.pos] = 0;
        cap
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
