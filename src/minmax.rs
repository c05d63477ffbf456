use std::cmp::Ordering;

/// Returns `(min, max)` of two values. When the values are equivalent, the
/// first argument is returned first, so the ordering is stable.
#[inline]
#[must_use]
pub fn minmax<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a { (b, a) } else { (a, b) }
}

/// Returns `(min, max)` of two values under a caller-supplied ordering, with
/// the same stability as [`minmax`].
#[inline]
#[must_use]
pub fn minmax_by<T, F>(a: T, b: T, compare: F) -> (T, T)
where
    F: Fn(&T, &T) -> Ordering, {
    if compare(&b, &a) == Ordering::Less { (b, a) } else { (a, b) }
}

/// Returns the indices of the first minimum and the last maximum of `seq` in
/// a single pass, or [`None`] for an empty sequence.
///
/// Elements are consumed in pairs and each pair is ordered internally before
/// being tested against the running extrema, which needs about `3n/2`
/// comparisons rather than the `2n` of two independent scans.
#[inline]
#[must_use]
pub fn minmax_element<T: Ord>(seq: &[T]) -> Option<(usize, usize)> {
    minmax_element_by(seq, T::cmp)
}

/// Same as [`minmax_element`] but under a caller-supplied ordering.
#[must_use]
pub fn minmax_element_by<T, F>(seq: &[T], compare: F) -> Option<(usize, usize)>
where
    F: Fn(&T, &T) -> Ordering, {
    if seq.is_empty() {
        return None;
    }

    let (mut min, mut max) = if seq.len() == 1 {
        (0, 0)
    } else if compare(&seq[1], &seq[0]) == Ordering::Less {
        (1, 0)
    } else {
        (0, 1)
    };

    let mut i = 2;
    while i + 1 < seq.len() {
        // Order the pair first; ties keep the earlier index low so that the
        // first-min/last-max rule below holds.
        let (lo, hi) = if compare(&seq[i + 1], &seq[i]) == Ordering::Less {
            (i + 1, i)
        } else {
            (i, i + 1)
        };

        if compare(&seq[lo], &seq[min]) == Ordering::Less {
            min = lo;
        }
        if compare(&seq[hi], &seq[max]) != Ordering::Less {
            max = hi;
        }

        i += 2;
    }

    // Odd leftover element.
    if i < seq.len() {
        if compare(&seq[i], &seq[min]) == Ordering::Less {
            min = i;
        }
        if compare(&seq[i], &seq[max]) != Ordering::Less {
            max = i;
        }
    }

    Some((min, max))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders_pairs_stably() {
        assert_eq!(minmax(3, 1), (1, 3));
        assert_eq!(minmax(1, 3), (1, 3));
        assert_eq!(minmax("left", "left"), ("left", "left"));

        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(minmax_by(3, 1, reversed), (3, 1));
    }

    #[test]
    fn finds_first_min_and_last_max() {
        assert_eq!(minmax_element(&[1, 3, 1, 3]), Some((0, 3)));
        assert_eq!(minmax_element(&[2, 2, 2]), Some((0, 2)));
        assert_eq!(minmax_element(&[5, 4, 3, 2, 1]), Some((4, 0)));
        assert_eq!(minmax_element(&[7]), Some((0, 0)));
        assert_eq!(minmax_element::<u8>(&[]), None);
    }

    #[test]
    fn agrees_with_independent_scans() {
        let data: &[u16] = &[9, 4, 6, 4, 9, 1, 1, 8, 9, 3];
        let (min, max) = minmax_element(data).unwrap();

        assert_eq!(data[min], 1);
        assert_eq!(min, 5);
        assert_eq!(data[max], 9);
        assert_eq!(max, 8);
    }

    #[test]
    fn custom_ordering() {
        let words = ["bb", "a", "dddd", "ccc"];
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());

        assert_eq!(minmax_element_by(&words, by_len), Some((1, 2)));
    }
}
