#![no_main]

use libfuzzer_sys::fuzz_target;

use maxwell_mean_sort_fuzz::{check_sort, u8_as_x};

fuzz_target!(|data: &[u8]| {
    check_sort(u8_as_x(data, |b| i16::from_le_bytes([b[0], b[1]])));
});
