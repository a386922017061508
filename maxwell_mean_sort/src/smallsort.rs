use crate::MeanKey;

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// `v[..offset]` must already be sorted. Equal elements keep their relative order.
pub(crate) fn insertion_sort_shift_left<T: MeanKey>(v: &mut [T], offset: usize) {
    let len = v.len();

    assert!(offset != 0 && offset <= len.max(1));

    for i in offset..len {
        insert_tail(&mut v[..=i]);
    }
}

/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]` so that the whole
/// `v` becomes sorted.
#[inline(always)]
fn insert_tail<T: MeanKey>(v: &mut [T]) {
    let mut hole = v.len() - 1;
    let key = v[hole];

    // Shift every larger predecessor one to the right, then drop the key into the gap.
    while hole > 0 && v[hole - 1] > key {
        v[hole] = v[hole - 1];
        hole -= 1;
    }

    v[hole] = key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small() {
        let mut v = [5, 3, 8, 1, 9, 2];
        insertion_sort_shift_left(&mut v, 1);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        insertion_sort_shift_left(&mut empty, 1);

        let mut single = [42];
        insertion_sort_shift_left(&mut single, 1);
        assert_eq!(single, [42]);
    }

    #[test]
    fn respects_offset() {
        let mut v = [1, 4, 9, 3, 0];
        insertion_sort_shift_left(&mut v, 3);
        assert_eq!(v, [0, 1, 3, 4, 9]);
    }

    #[test]
    fn stable_for_equal_keys() {
        // Order by the high byte only, the low byte records the original position.
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        struct Tagged(u16);

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                (self.0 >> 8).cmp(&(other.0 >> 8))
            }
        }

        impl From<Tagged> for f64 {
            fn from(t: Tagged) -> f64 {
                (t.0 >> 8) as f64
            }
        }

        let mut v: Vec<Tagged> = [3u16, 1, 3, 2, 1, 3]
            .iter()
            .enumerate()
            .map(|(i, &k)| Tagged((k << 8) | i as u16))
            .collect();

        insertion_sort_shift_left(&mut v, 1);

        let raw: Vec<u16> = v.iter().map(|t| t.0).collect();
        assert_eq!(raw, [0x0101, 0x0104, 0x0203, 0x0300, 0x0302, 0x0305]);
    }
}
