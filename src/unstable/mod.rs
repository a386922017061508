pub mod rust_maxwell_mean;
pub mod rust_quicksort_last;
pub mod rust_std;

// Sorts independent sub-ranges on the rayon thread pool.
#[cfg(feature = "parallel")]
pub mod rust_maxwell_mean_parallel;
