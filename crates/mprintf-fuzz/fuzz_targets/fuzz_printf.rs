#![no_main]
use libfuzzer_sys::fuzz_target;
use mprintf_core::{FormatArg, MPRINTF_BUF_SIZE, Status, m_vprintf, m_vsnprintf};

const SENTINEL: u8 = 0xEE;

fuzz_target!(|data: &[u8]| {
    // Layout: [capacity, selector, format...]
    let [cap, selector, fmt @ ..] = data else {
        return;
    };
    let capacity = usize::from(*cap);

    let args = [
        FormatArg::Int(i64::from(*selector) - 128),
        FormatArg::Str(Some(fmt)),
        FormatArg::Float(f64::from(*selector) * 1.0e3),
        FormatArg::Char(*selector),
        FormatArg::Str(None),
        FormatArg::Pointer(usize::from(*selector) << 12),
        FormatArg::Uint(u64::MAX),
    ];

    // Extra sentinel bytes past the capacity must never be touched.
    let mut backing = vec![SENTINEL; capacity + 32];
    let n = m_vsnprintf(&mut backing[..capacity], fmt, &args);
    assert!(n <= capacity);
    assert!(backing[capacity..].iter().all(|&b| b == SENTINEL));
    if capacity > 0 {
        let end = backing[..capacity]
            .iter()
            .position(|&b| b == 0)
            .expect("output must be NUL-terminated");
        assert!(end < capacity);
    }

    let mut streamed = 0usize;
    let mut sink = |_: u8, _: u8| {
        streamed += 1;
        Status::Ok
    };
    let n = m_vprintf(&mut sink, 0, fmt, &args);
    assert_eq!(n, streamed);
    assert!(n < MPRINTF_BUF_SIZE);
});
