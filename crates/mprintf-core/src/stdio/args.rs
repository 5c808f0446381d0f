//! Typed format arguments.
//!
//! A format call takes a slice of [`FormatArg`] instead of a C varargs list.
//! Each conversion pulls the next argument and reads it the way the
//! conversion expects, whatever variant was supplied: integer conversions
//! see a 32-bit `int` / `unsigned int`, `%p` sees an address, `%f` sees an
//! `f64`, `%s` sees a byte string or null. A missing argument reads as zero
//! (or as a null string).

/// One argument of a format call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    Uint(u64),
    /// Floating-point value, read by `%f`.
    Float(f64),
    /// Single byte, read by `%c`.
    Char(u8),
    /// Byte string; `None` stands for a null pointer. Rendering stops at the
    /// first NUL byte or at the end of the slice.
    Str(Option<&'a [u8]>),
    /// Address, read by `%p`.
    Pointer(usize),
}

impl FormatArg<'_> {
    /// Read as a C `int`.
    #[must_use]
    pub fn as_int(&self) -> i32 {
        match *self {
            Self::Int(v) => v as i32,
            Self::Uint(v) => v as i32,
            Self::Float(v) => v as i32,
            Self::Char(c) => i32::from(c),
            Self::Pointer(p) => p as i32,
            Self::Str(_) => 0,
        }
    }

    /// Read as a C `unsigned int`; negative values wrap.
    #[must_use]
    pub fn as_uint(&self) -> u32 {
        match *self {
            Self::Int(v) => v as u32,
            Self::Uint(v) => v as u32,
            Self::Float(v) => v as u32,
            Self::Char(c) => u32::from(c),
            Self::Pointer(p) => p as u32,
            Self::Str(_) => 0,
        }
    }

    /// Read as an address. Strings yield the address of their first byte.
    #[must_use]
    pub fn as_pointer(&self) -> usize {
        match *self {
            Self::Int(v) => v as usize,
            Self::Uint(v) => v as usize,
            Self::Float(v) => v as usize,
            Self::Char(c) => usize::from(c),
            Self::Pointer(p) => p,
            Self::Str(Some(s)) => s.as_ptr() as usize,
            Self::Str(None) => 0,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Uint(v) => v as f64,
            Self::Float(v) => v,
            Self::Char(c) => f64::from(c),
            Self::Pointer(p) => p as f64,
            Self::Str(_) => 0.0,
        }
    }

    /// Read as a string; every non-string variant reads as null.
    #[must_use]
    pub fn as_str(&self) -> Option<&[u8]> {
        match *self {
            Self::Str(s) => s,
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for FormatArg<'_> {
                fn from(v: $t) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint as u64: u8, u16, u32, u64, usize);

impl From<f32> for FormatArg<'_> {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Narrowed to its low byte, as `%c` does with an `int`.
impl From<char> for FormatArg<'_> {
    fn from(c: char) -> Self {
        Self::Char(c as u32 as u8)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(Some(s.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Self::Str(Some(s))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FormatArg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Self::Str(Some(&s[..]))
    }
}

impl<'a> From<Option<&'a str>> for FormatArg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Self::Str(s.map(str::as_bytes))
    }
}

impl<'a> From<Option<&'a [u8]>> for FormatArg<'a> {
    fn from(s: Option<&'a [u8]>) -> Self {
        Self::Str(s)
    }
}

impl<T> From<*const T> for FormatArg<'_> {
    fn from(p: *const T) -> Self {
        Self::Pointer(p as usize)
    }
}

impl<T> From<*mut T> for FormatArg<'_> {
    fn from(p: *mut T) -> Self {
        Self::Pointer(p as usize)
    }
}

// ---------------------------------------------------------------------------
// Argument cursor
// ---------------------------------------------------------------------------

/// Hands out arguments one per conversion, in order.
#[derive(Debug, Clone)]
pub struct ArgCursor<'s, 'a> {
    args: &'s [FormatArg<'a>],
    next: usize,
}

impl<'s, 'a> ArgCursor<'s, 'a> {
    #[must_use]
    pub fn new(args: &'s [FormatArg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Number of arguments consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.next
    }

    fn take(&mut self) -> Option<FormatArg<'a>> {
        let arg = self.args.get(self.next).copied();
        if arg.is_some() {
            self.next += 1;
        }
        arg
    }

    pub fn next_int(&mut self) -> i32 {
        self.take().map_or(0, |a| a.as_int())
    }

    pub fn next_uint(&mut self) -> u32 {
        self.take().map_or(0, |a| a.as_uint())
    }

    pub fn next_pointer(&mut self) -> usize {
        self.take().map_or(0, |a| a.as_pointer())
    }

    pub fn next_float(&mut self) -> f64 {
        self.take().map_or(0.0, |a| a.as_float())
    }

    pub fn next_str(&mut self) -> Option<&'a [u8]> {
        self.take().and_then(|a| match a {
            FormatArg::Str(s) => s,
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_reads_follow_c_int_width() {
        assert_eq!(FormatArg::from(-1i64).as_uint(), u32::MAX);
        assert_eq!(FormatArg::from(0x1_0000_0005u64).as_int(), 5);
        assert_eq!(FormatArg::from(-42).as_int(), -42);
        assert_eq!(FormatArg::from(2.9f64).as_int(), 2);
    }

    #[test]
    fn test_char_is_narrowed_to_a_byte() {
        assert_eq!(FormatArg::from('A'), FormatArg::Char(b'A'));
        assert_eq!(FormatArg::from('\u{141}'), FormatArg::Char(0x41));
    }

    #[test]
    fn test_strings_and_null() {
        assert_eq!(FormatArg::from("hi").as_str(), Some(&b"hi"[..]));
        assert_eq!(FormatArg::from(None::<&str>).as_str(), None);
        assert_eq!(FormatArg::from(7).as_str(), None);
        assert_eq!(FormatArg::Str(None).as_pointer(), 0);
    }

    #[test]
    fn test_cursor_runs_dry_with_zero_values() {
        let args = [FormatArg::from(9)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(cursor.next_int(), 9);
        assert_eq!(cursor.next_int(), 0);
        assert_eq!(cursor.next_float(), 0.0);
        assert_eq!(cursor.next_str(), None);
        assert_eq!(cursor.consumed(), 1);
    }
}
