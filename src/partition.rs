/// Returns `true` if every element satisfying `pred` precedes every element
/// that does not. Empty sequences are partitioned.
#[inline]
#[must_use]
pub fn is_partitioned<T, F>(seq: &[T], pred: F) -> bool
where
    F: Fn(&T) -> bool, {
    let mut iter = seq.iter();
    for element in iter.by_ref() {
        if !pred(element) {
            break;
        }
    }

    iter.all(|element| !pred(element))
}

/// Returns the index of the first element of `seq` that does not satisfy
/// `pred`, or `seq.len()` if all do.
///
/// The sequence must already be partitioned by `pred` (see
/// [`is_partitioned`]); the point is then located with `O(log n)` probes.
#[inline]
#[must_use]
pub fn partition_point<T, F>(seq: &[T], pred: F) -> usize
where
    F: Fn(&T) -> bool, {
    let mut base = 0;
    let mut len = seq.len();

    while len > 0 {
        let half = len / 2;
        if pred(&seq[base + half]) {
            base += half + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    base
}
