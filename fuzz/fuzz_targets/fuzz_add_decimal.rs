//! Fuzz target: arbitrary-length decimal addition behind `/add/{a}/{b}`.
//!
//! Input is split on the first `/` into two operands, mirroring the path.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some((a, b)) = text.split_once('/') else {
        return;
    };
    if let Ok(sum) = sundial_core::add_decimal(a, b) {
        assert!(sum.bytes().all(|c| c.is_ascii_digit()));
        assert!(sum == "0" || !sum.starts_with('0'), "leading zero in {sum}");
        assert!(sum.len() >= a.trim_start_matches('0').len().max(b.trim_start_matches('0').len()));
    }
});
