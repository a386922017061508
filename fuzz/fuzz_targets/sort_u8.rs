#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    maxwell_mean_sort_fuzz::check_sort(data.to_vec());
});
