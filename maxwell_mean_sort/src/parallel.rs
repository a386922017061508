use crate::quicksort::split;
use crate::MeanKey;

/// Ranges at or below this length are sorted sequentially on the current thread.
const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Sorts the slice ascending, in place, sorting independent sub-ranges in parallel.
///
/// Large ranges are partitioned around their mean on the calling thread, the two resulting
/// halves are disjoint `&mut` sub-slices and are handed to [`rayon::join`]. Once a range is small
/// enough it is finished with [`sort`](crate::sort). The result is the same as for `sort`.
pub fn par_sort<T: MeanKey + Send>(v: &mut [T]) {
    if v.len() <= PARALLEL_THRESHOLD {
        crate::sort(v);
        return;
    }

    let Some(mid) = split(v) else {
        return;
    };

    let (left, right) = v.split_at_mut(mid);
    rayon::join(|| par_sort(left), || par_sort(right));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sequential() {
        let mut v: Vec<i32> = (0..200_000).map(|x| (x * 7919) % 200_003 - 100_000).collect();
        let mut expected = v.clone();
        crate::sort(&mut expected);

        par_sort(&mut v);

        assert_eq!(v, expected);
    }

    #[test]
    fn all_equal_large() {
        let mut v = vec![7i32; 100_000];
        par_sort(&mut v);
        assert!(v.iter().all(|&x| x == 7));
    }
}
