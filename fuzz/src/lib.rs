use std::fmt::Debug;
use std::mem;

/// Reinterprets the fuzzer bytes as a vec of `T`, dropping trailing bytes that don't fill a whole
/// element.
pub fn u8_as_x<T>(data: &[u8], from_le_bytes: impl Fn(&[u8]) -> T) -> Vec<T> {
    data.chunks_exact(mem::size_of::<T>())
        .map(from_le_bytes)
        .collect()
}

/// Sorts `v` with Maxwell Mean Sort and checks the result against the standard library.
pub fn check_sort<T: maxwell_mean_sort::MeanKey + Debug>(mut v: Vec<T>) {
    let mut expected = v.clone();
    expected.sort_unstable();

    maxwell_mean_sort::sort(&mut v);

    assert_eq!(v, expected);
}
