use std::cell::Cell;

use mprintf_core::{
    BoundedWriter, FormatArg, OVERFLOW_GUARD, Printer, Status, format_into, m_printf, m_snprintf,
    m_vsnprintf,
};

/// Split a buffer at its first NUL.
fn terminated(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).expect("output is NUL-terminated");
    &buf[..end]
}

/// Deterministic xorshift generator for the sweep tests.
struct Xorshift(u64);

impl Xorshift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn byte_from(&mut self, alphabet: &[u8]) -> u8 {
        alphabet[(self.next() % alphabet.len() as u64) as usize]
    }
}

#[test]
fn literal_strings_below_the_guard_are_copied_verbatim() {
    for capacity in [OVERFLOW_GUARD + 1, 32, 64, 128, 256] {
        let max_len = capacity.saturating_sub(OVERFLOW_GUARD);
        for len in 0..max_len {
            let fmt: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
            let mut buf = vec![0xAAu8; capacity];
            let n = m_vsnprintf(&mut buf, &fmt, &[]);
            assert_eq!(n, len, "capacity={capacity} len={len}");
            assert_eq!(&buf[..len], &fmt[..]);
            assert_eq!(buf[len], 0);
        }
    }
}

#[test]
fn overlong_output_ends_with_marker_and_reports_capacity() {
    for capacity in [8usize, 24, 25, 40, 100, 256] {
        let fmt = vec![b'#'; capacity + 10];
        let mut buf = vec![0xAAu8; capacity];
        let n = m_vsnprintf(&mut buf, &fmt, &[]);
        assert_eq!(n, capacity);
        assert!(terminated(&buf).ends_with(b"(...)"), "capacity={capacity}");
    }
}

#[test]
fn overlong_formatted_output_is_truncated() {
    let mut buf = [0u8; 64];
    let n = m_snprintf!(
        &mut buf,
        "%d %d %d %d %d %d %d %d %d %d",
        1_000_000,
        2_000_000,
        3_000_000,
        4_000_000,
        5_000_000,
        6_000_000,
        7_000_000,
        8_000_000,
        9_000_000,
        10_000_000
    );
    assert_eq!(n, 64);
    assert!(terminated(&buf).ends_with(b"(...)"));
}

#[test]
fn null_string_renders_placeholder() {
    let mut buf = [0u8; 64];
    let n = m_snprintf!(&mut buf, "%s", None::<&str>);
    assert_eq!(terminated(&buf), b"<NULL>");
    assert_eq!(n, 6);
}

#[test]
fn hex_always_has_prefix() {
    let mut buf = [0u8; 64];
    m_snprintf!(&mut buf, "%x", 0);
    assert_eq!(terminated(&buf), b"0x0");
    m_snprintf!(&mut buf, "%X", 0xBEEFu32);
    assert_eq!(terminated(&buf), b"0xbeef");
}

#[test]
fn negative_decimal() {
    let mut buf = [0u8; 64];
    let n = m_snprintf!(&mut buf, "%d", -42);
    assert_eq!(terminated(&buf), b"-42");
    assert_eq!(n, 3);
}

#[test]
fn unknown_conversion_is_literal() {
    let mut buf = [0u8; 64];
    m_snprintf!(&mut buf, "%z");
    assert_eq!(terminated(&buf), b"%z");
}

#[test]
fn mixed_conversions() {
    let mut buf = [0u8; 128];
    let n = m_snprintf!(
        &mut buf,
        "[%s] c=%c d=%d u=%u o=%o x=%x f=%.3f%%",
        "sensor",
        'k',
        -7,
        7u8,
        64,
        4096,
        21.5
    );
    let out = terminated(&buf);
    assert_eq!(out, b"[sensor] c=k d=-7 u=7 o=100 x=0x1000 f=21.500%");
    assert_eq!(n, out.len());
}

#[test]
fn ignored_flags_do_not_change_output() {
    let mut plain = [0u8; 64];
    let mut flagged = [0u8; 64];
    m_snprintf!(&mut plain, "%d|%x|%s", 12, 12, "s");
    m_snprintf!(&mut flagged, "%+ld|%#lx|%-s", 12, 12, "s");
    assert_eq!(terminated(&plain), terminated(&flagged));
}

#[test]
fn streaming_without_sink_does_no_work() {
    let touched = Cell::new(0usize);
    let counter = |_: u8, _: u8| {
        touched.set(touched.get() + 1);
        Status::Ok
    };

    let mut printer = Printer::with_sink(counter);
    let parked = printer.clear_sink();
    assert_eq!(m_printf!(printer, "x=%d\n", 5), 0);
    assert_eq!(touched.get(), 0);

    if let Some(sink) = parked {
        printer.set_sink(sink);
    }
    assert_eq!(m_printf!(printer, "x=%d\n", 5), 4);
    assert_eq!(touched.get(), 4);
}

#[test]
fn marker_text_round_trips_as_literal() {
    let mut buf = [0u8; 64];
    let n = m_snprintf!(&mut buf, "partial(...)");
    assert_eq!(terminated(&buf), b"partial(...)");
    assert_eq!(n, 12);
}

#[test]
fn writer_flags_truncation_behind_the_capacity_return() {
    let mut buf = [0u8; 30];
    let mut writer = BoundedWriter::new(&mut buf);
    let n = format_into(&mut writer, b"0123456789", &[]);
    assert_eq!(n, 30);
    assert!(writer.is_truncated());
}

#[test]
fn random_formats_never_escape_the_buffer() {
    const ALPHABET: &[u8] = b"%%%%cspoxXdiufzl+-#*.0123456789 ab\0";
    let mut rng = Xorshift(0x9E37_79B9_7F4A_7C15);
    let long = [b'q'; 300];
    let args = [
        FormatArg::from(-123_456),
        FormatArg::from(&long[..]),
        FormatArg::from(3.75),
        FormatArg::from('w'),
        FormatArg::Str(None),
        FormatArg::Pointer(usize::MAX),
        FormatArg::from(u64::MAX),
    ];

    for round in 0..2_000 {
        let capacity = (rng.next() % 96) as usize;
        let fmt_len = (rng.next() % 64) as usize;
        let fmt: Vec<u8> = (0..fmt_len).map(|_| rng.byte_from(ALPHABET)).collect();

        // Guard bytes after the capacity must stay untouched.
        let mut backing = vec![0xEEu8; capacity + 16];
        let n = m_vsnprintf(&mut backing[..capacity], &fmt, &args);

        assert!(n <= capacity, "round={round} fmt={fmt:?}");
        assert!(backing[capacity..].iter().all(|&b| b == 0xEE), "round={round}");
        if capacity > 0 {
            assert!(backing[..capacity].contains(&0), "round={round}");
        }
    }
}

#[test]
fn padded_rendering_past_the_slack_line_is_marked() {
    for (fmt, arg) in [
        (&b"123456%24d"[..], FormatArg::from(5)),
        (&b"123456%22x"[..], FormatArg::from(0xabc)),
        (&b"123456%24f"[..], FormatArg::from(1.25)),
        (&b"123456%24u"[..], FormatArg::from(7u32)),
    ] {
        let mut buf = [0u8; 30];
        let mut writer = BoundedWriter::new(&mut buf);
        let n = format_into(&mut writer, fmt, &[arg]);
        assert_eq!(n, 30, "fmt={fmt:?}");
        assert!(writer.is_truncated(), "fmt={fmt:?}");
        assert!(terminated(&buf).ends_with(b"(...)"), "fmt={fmt:?}");
    }
}

#[test]
fn dropped_output_never_reports_a_fit() {
    // Any call that returns less than the capacity must hold the whole
    // rendering; compare against a rendering into a roomy buffer.
    let mut rng = Xorshift(0xC0FF_EE00_1234_5678);
    for round in 0..2_000 {
        let capacity = 24 + (rng.next() % 40) as usize;
        let width = (rng.next() % 30) as u8;
        let conv = rng.byte_from(b"dxuof");
        let prefix_len = (rng.next() % 12) as usize;
        let mut fmt: Vec<u8> = (0..prefix_len).map(|_| b'p').collect();
        fmt.push(b'%');
        fmt.extend(width.to_string().bytes());
        fmt.push(conv);
        let args = [FormatArg::from(rng.next() as i64)];

        let mut roomy = [0u8; 256];
        let full = m_vsnprintf(&mut roomy, &fmt, &args);
        let mut buf = vec![0u8; capacity];
        let n = m_vsnprintf(&mut buf, &fmt, &args);
        if n < capacity {
            assert_eq!(n, full, "round={round} fmt={fmt:?}");
            assert_eq!(terminated(&buf), terminated(&roomy), "round={round}");
        } else {
            assert!(terminated(&buf).ends_with(b"(...)"), "round={round}");
        }
    }
}
