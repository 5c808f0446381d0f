//! # mprintf-core
//!
//! A small printf-style formatter for targets without an allocator.
//!
//! Output is either written into a caller-supplied buffer
//! ([`m_vsnprintf`], [`m_snprintf!`]) or staged on the stack and streamed
//! one byte at a time through a [`ByteSink`] ([`m_vprintf`], [`Printer`],
//! [`m_printf!`]). The destination bound is never exceeded: when fewer than
//! [`OVERFLOW_GUARD`] bytes remain, output ends with `(...)` and the call
//! reports the full capacity.

#![no_std]
#![deny(unsafe_code)]

mod macros;
pub mod stdio;
pub mod stdlib;

pub use stdio::{
    BoundedWriter, ByteSink, FormatArg, MPRINTF_BUF_SIZE, OVERFLOW_GUARD, Printer, Status,
    TRUNCATION_MARKER, format_into, m_vprintf, m_vsnprintf,
};
