use maxwell_mean_sort::MeanKey;

sort_impl!("rust_maxwell_mean_unstable");

#[inline]
pub fn sort<T: MeanKey>(v: &mut [T]) {
    maxwell_mean_sort::sort(v);
}
