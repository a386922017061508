use crate::smallsort::insertion_sort_shift_left;
use crate::{MeanKey, INSERTION_THRESHOLD};

/// Capacity of the work stack.
///
/// Pushing the smaller sub-range last means it is popped and finished before its larger sibling is
/// looked at. Every range on the stack is therefore at most half the size of the range below it,
/// except for the bottom one, so no more than `log2(len) + 1` ranges can be pending at once.
pub(crate) const MAX_STACK_DEPTH: usize = usize::BITS as usize;

/// Inclusive index range `[start, end]` of elements that still need sorting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    #[inline(always)]
    fn len(self) -> usize {
        self.end - self.start + 1
    }
}

/// Fixed capacity LIFO of pending ranges.
pub(crate) struct WorkStack {
    frames: [Range; MAX_STACK_DEPTH],
    top: usize,
    peak: usize,
}

impl WorkStack {
    fn new() -> Self {
        Self {
            frames: [Range { start: 0, end: 0 }; MAX_STACK_DEPTH],
            top: 0,
            peak: 0,
        }
    }

    #[inline(always)]
    fn push(&mut self, range: Range) {
        if self.top == MAX_STACK_DEPTH {
            panic!(
                "maxwell mean sort work stack overflow: {MAX_STACK_DEPTH} ranges already pending \
                 while pushing {range:?}"
            );
        }

        self.frames[self.top] = range;
        self.top += 1;
        self.peak = self.peak.max(self.top);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<Range> {
        if self.top == 0 {
            return None;
        }

        self.top -= 1;
        Some(self.frames[self.top])
    }
}

/// Sorts `v` iteratively, `v.len()` must be at least 1.
///
/// Returns the largest number of ranges that were pending at the same time.
pub(crate) fn quicksort<T: MeanKey>(v: &mut [T]) -> usize {
    let mut stack = WorkStack::new();
    stack.push(Range {
        start: 0,
        end: v.len() - 1,
    });

    while let Some(range) = stack.pop() {
        let Range { start, end } = range;

        if range.len() <= INSERTION_THRESHOLD {
            insertion_sort_shift_left(&mut v[start..=end], 1);
            continue;
        }

        let Some(mid) = split(&mut v[start..=end]) else {
            // All elements in the range are equal.
            continue;
        };
        let mid = start + mid;

        // `split` guarantees `start < mid <= end`. Single element ranges are sorted and are never
        // pushed.
        let left = (start < mid - 1).then_some(Range {
            start,
            end: mid - 1,
        });
        let right = (mid < end).then_some(Range { start: mid, end });

        match (left, right) {
            (Some(left), Some(right)) => {
                // Smaller on top, see `MAX_STACK_DEPTH`.
                if left.len() <= right.len() {
                    stack.push(right);
                    stack.push(left);
                } else {
                    stack.push(left);
                    stack.push(right);
                }
            }
            (Some(only), None) | (None, Some(only)) => stack.push(only),
            (None, None) => {}
        }
    }

    stack.peak
}

/// Partitions `v` around the mean of its elements and returns the index of the first element of
/// the right side, which is always in `1..v.len()`.
///
/// Returns `None` if all elements of `v` are equal, in which case `v` is left untouched.
pub(crate) fn split<T: MeanKey>(v: &mut [T]) -> Option<usize> {
    split_around(v, mean(v))
}

fn split_around<T: MeanKey>(v: &mut [T], pivot: f64) -> Option<usize> {
    let mid = partition(v, pivot);
    if mid != 0 && mid != v.len() {
        return Some(mid);
    }

    // The mean of distinct values lies strictly below the maximum, so getting here means either all
    // elements are equal, or the summation rounded the mean onto one of the extremes.
    let (min, max) = min_max(v)?;
    if min == max {
        return None;
    }

    // Exact for all `MeanKey` types, and `min <= midpoint < max` puts at least one element on
    // each side.
    let midpoint = (min.to_f64() + max.to_f64()) / 2.0;
    Some(partition(v, midpoint))
}

/// Arithmetic mean of `v`, which must not be empty.
#[inline]
fn mean<T: MeanKey>(v: &[T]) -> f64 {
    let sum: f64 = v.iter().map(|x| x.to_f64()).sum();
    sum / v.len() as f64
}

fn min_max<T: MeanKey>(v: &[T]) -> Option<(T, T)> {
    let (first, rest) = v.split_first()?;

    Some(rest.iter().fold((*first, *first), |(min, max), &x| {
        (min.min(x), max.max(x))
    }))
}

/// Re-arranges `v` such that all elements `<= pivot` are on the left followed by all elements
/// `> pivot`, and returns the number of elements on the left.
///
/// Both cursors converge from the ends: `left` skips elements that belong left, `right` skips
/// elements that belong right, and the two misplaced elements they stop on are swapped. `right` is
/// exclusive here, one past the element it looks at.
pub(crate) fn partition<T: MeanKey>(v: &mut [T], pivot: f64) -> usize {
    let mut left = 0;
    let mut right = v.len();

    while left < right {
        while left < right && v[left].to_f64() <= pivot {
            left += 1;
        }
        while left < right && v[right - 1].to_f64() > pivot {
            right -= 1;
        }

        if left + 1 < right {
            v.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }

    left
}
