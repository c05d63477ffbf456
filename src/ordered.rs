/// Returns `true` if every adjacent pair of `seq` satisfies `relation`.
/// Sequences with fewer than two elements are ordered under any relation.
///
/// The derived checks [`is_increasing`], [`is_decreasing`],
/// [`is_strictly_increasing`], and [`is_strictly_decreasing`] cover the
/// usual comparisons; supply a custom relation for anything else:
///
/// ```
/// use trawl::ordered::is_ordered;
///
/// // Each element divides the next.
/// assert!(is_ordered(&[1, 2, 4, 8], |a, b| b % a == 0));
/// assert!(!is_ordered(&[1, 2, 4, 7], |a, b| b % a == 0));
/// ```
#[inline]
#[must_use]
pub fn is_ordered<T, F>(seq: &[T], relation: F) -> bool
where
    F: Fn(&T, &T) -> bool, {
    seq.windows(2).all(|pair| relation(&pair[0], &pair[1]))
}

/// Returns `true` if `seq` is non-decreasing.
#[inline]
#[must_use]
pub fn is_increasing<T: PartialOrd>(seq: &[T]) -> bool {
    is_ordered(seq, |a, b| a <= b)
}

/// Returns `true` if `seq` is non-increasing.
#[inline]
#[must_use]
pub fn is_decreasing<T: PartialOrd>(seq: &[T]) -> bool {
    is_ordered(seq, |a, b| b <= a)
}

/// Returns `true` if `seq` is strictly increasing.
#[inline]
#[must_use]
pub fn is_strictly_increasing<T: PartialOrd>(seq: &[T]) -> bool {
    is_ordered(seq, |a, b| a < b)
}

/// Returns `true` if `seq` is strictly decreasing.
#[inline]
#[must_use]
pub fn is_strictly_decreasing<T: PartialOrd>(seq: &[T]) -> bool {
    is_ordered(seq, |a, b| b < a)
}
