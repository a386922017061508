//! Named sort implementations for tests and benchmarks.
//!
//! Every module exposes a `sort` function and a `SortImpl` that plugs it into the shared
//! `sort_test_tools` suite and the benchmark harness.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: sort_test_tools::Element,
            {
                sort(arr);
            }
        }
    };
}

pub mod stable;
pub mod unstable;

pub use sort_test_tools::patterns;
