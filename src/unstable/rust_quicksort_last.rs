//! Textbook quicksort with the last element as pivot, the baseline Maxwell Mean Sort is measured
//! against. Elements `<=` the pivot go left, everything else goes right.
//!
//! Quadratic for sorted inputs and inputs with few distinct values. Only the smaller side is
//! recursed into, so the call depth stays logarithmic even then.

use std::mem;

sort_impl!("rust_quicksort_last_unstable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v);
}

fn quicksort<T: Ord>(mut v: &mut [T]) {
    while v.len() > 1 {
        let mid = partition_last(v);

        // `v[mid]` is the pivot, in its final position.
        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Lomuto partition around `v[v.len() - 1]`. Returns the final position of the pivot.
fn partition_last<T: Ord>(v: &mut [T]) -> usize {
    let pivot = v.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if v[i] <= v[pivot] {
            v.swap(i, store);
            store += 1;
        }
    }

    v.swap(store, pivot);
    store
}
