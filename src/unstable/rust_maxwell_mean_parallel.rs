use maxwell_mean_sort::MeanKey;

sort_impl!("rust_maxwell_mean_parallel_unstable");

#[inline]
pub fn sort<T: MeanKey + Send>(v: &mut [T]) {
    maxwell_mean_sort::par_sort(v);
}
