//! Wall-clock measurement of a single sort call.

use std::time::{Duration, Instant};

pub fn pin_thread_to_core() {
    let pin_core_id: usize = 2;

    if let Some(core_id) = core_affinity::get_core_ids()
        .as_ref()
        .and_then(|ids| ids.get(pin_core_id))
    {
        core_affinity::set_for_current(*core_id);
    }
}

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}
