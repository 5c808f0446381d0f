//! Shared benchmark workloads.

use mprintf_core::FormatArg;

/// A named format call.
pub struct Workload {
    pub name: &'static str,
    pub format: &'static [u8],
    pub args: &'static [FormatArg<'static>],
}

/// Representative log-line shapes, short to long.
pub const WORKLOADS: &[Workload] = &[
    Workload {
        name: "literal",
        format: b"system ready\n",
        args: &[],
    },
    Workload {
        name: "int",
        format: b"tick=%u\n",
        args: &[FormatArg::Uint(1_234_567)],
    },
    Workload {
        name: "mixed",
        format: b"[%s] id=%d addr=%p temp=%.2f\n",
        args: &[
            FormatArg::Str(Some(b"sensor")),
            FormatArg::Int(-42),
            FormatArg::Pointer(0x2000_1000),
            FormatArg::Float(21.375),
        ],
    },
    Workload {
        name: "string_heavy",
        format: b"%s %s %s\n",
        args: &[
            FormatArg::Str(Some(b"alpha-bravo-charlie")),
            FormatArg::Str(Some(b"delta-echo-foxtrot")),
            FormatArg::Str(Some(b"golf-hotel-india")),
        ],
    },
];

/// A format string long enough to trip the overflow guard at `len`.
#[must_use]
pub fn overlong_format(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'a' + (i % 26) as u8).collect()
}
