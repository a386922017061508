use criterion::Criterion;

use sort_test_tools::{Element, Sort};

#[allow(unused_imports)]
use mean_sort_research::{stable, unstable};

use crate::modules::util;

/// Last element pivots go quadratic on everything but well mixed distinct values.
fn is_quadratic_for(sort_name: &str, pattern_name: &str) -> bool {
    sort_name.contains("quicksort_last") && !matches!(pattern_name, "random" | "random_1m")
}

pub fn bench_fn<S: Sort, T: Element>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if is_quadratic_for(&bench_name, pattern_name) {
        return;
    }

    util::bench_fn(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        &bench_name,
        S::sort,
    );
}

pub fn bench<T: Element>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl_path:path) => {{
            use $sort_impl_path::*;

            bench_fn::<SortImpl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    // --- Stable sorts ---

    bench_inst!(stable::rust_std);

    // --- Unstable sorts ---

    bench_inst!(unstable::rust_maxwell_mean);

    #[cfg(feature = "parallel")]
    bench_inst!(unstable::rust_maxwell_mean_parallel);

    bench_inst!(unstable::rust_std);

    bench_inst!(unstable::rust_quicksort_last);
}
