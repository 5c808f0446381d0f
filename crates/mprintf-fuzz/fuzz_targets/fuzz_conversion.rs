#![no_main]
use libfuzzer_sys::fuzz_target;
use mprintf_core::stdlib::{NUM_BUF_SIZE, NumBuf, dtostrf, ltoa_w, ultoa_w};

fuzz_target!(|data: &[u8]| {
    if data.len() < 11 {
        return;
    }
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    let bits = u64::from_le_bytes(raw);
    let base = u32::from(data[8]);
    let width = data[9] as i8;
    let precision = data[10] as i8;

    let mut scratch = NumBuf::new();
    assert!(ultoa_w(bits, base, width, &mut scratch).len() <= NUM_BUF_SIZE);
    assert!(ltoa_w(bits as i64, base, width, &mut scratch).len() <= NUM_BUF_SIZE);
    assert!(dtostrf(f64::from_bits(bits), width, precision, &mut scratch).len() <= NUM_BUF_SIZE);
});
