//! Maxwell Mean Sort
//!
//! An in-place integer quicksort that partitions each range around the arithmetic mean of its
//! elements and hands small ranges to insertion sort. Recursion is replaced by a fixed capacity
//! stack of pending index ranges.

mod ffi;
#[cfg(feature = "parallel")]
mod parallel;
mod quicksort;
mod smallsort;

pub use ffi::maxwell_mean_sort_py;

#[cfg(feature = "parallel")]
pub use parallel::par_sort;

/// Ranges with at most this many elements are sorted with insertion sort instead of being
/// partitioned further.
pub const INSERTION_THRESHOLD: usize = 50;

/// Element types that can be sorted around their arithmetic mean.
///
/// The conversion to `f64` must be lossless and order preserving. The blanket implementation
/// covers every `Copy + Ord` type with an `Into<f64>` implementation: the integers of 32 bits or
/// less, and `bool` (`false < true` maps to `0.0 < 1.0`). 64-bit integers are rejected at compile
/// time.
pub trait MeanKey: Copy + Ord {
    fn to_f64(self) -> f64;
}

impl<T> MeanKey for T
where
    T: Copy + Ord + Into<f64>,
{
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self.into()
    }
}

/// Sorts the slice ascending, in place.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place (i.e., does not
/// allocate).
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
///
/// maxwell_mean_sort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
///
/// # Current implementation
///
/// Ranges longer than [`INSERTION_THRESHOLD`] are partitioned around their mean with a two-pointer
/// scan, elements equal to the mean go left. Ranges where every element is equal are recognized and
/// left alone. The smaller of the two resulting ranges is always processed first, which bounds the
/// number of pending ranges by `log2(len) + 1`.
#[inline]
pub fn sort<T: MeanKey>(v: &mut [T]) {
    // Zero and one element slices are already sorted.
    if v.len() < 2 {
        return;
    }

    quicksort::quicksort(v);
}

#[test]
fn mean_key_is_lossless() {
    assert_eq!(i32::MIN.to_f64(), -2_147_483_648.0);
    assert_eq!(i32::MAX.to_f64(), 2_147_483_647.0);
    assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
    assert_eq!((-7i8).to_f64(), -7.0);
    assert_eq!(true.to_f64(), 1.0);
}

#[test]
fn sorts_bool() {
    let mut v: Vec<bool> = (0..500).map(|i| i % 3 == 0).collect();
    let mut expected = v.clone();
    expected.sort();

    sort(&mut v);
    assert_eq!(v, expected);
}
