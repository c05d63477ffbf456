/// Returns `true` if every element of `seq` satisfies `pred`. Empty
/// sequences vacuously pass.
#[inline]
#[must_use]
pub fn all_of<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    seq.iter().all(pred)
}

/// Returns `true` if every element of `seq` equals `value`.
#[inline]
#[must_use]
pub fn all_of_equal<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().all(|e| e == value)
}

/// Returns `true` if at least one element of `seq` satisfies `pred`. Empty
/// sequences fail.
#[inline]
#[must_use]
pub fn any_of<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    seq.iter().any(pred)
}

/// Returns `true` if at least one element of `seq` equals `value`.
#[inline]
#[must_use]
pub fn any_of_equal<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().any(|e| e == value)
}

/// Returns `true` if no element of `seq` satisfies `pred`. Empty sequences
/// vacuously pass.
#[inline]
#[must_use]
pub fn none_of<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    !seq.iter().any(pred)
}

/// Returns `true` if no element of `seq` equals `value`.
#[inline]
#[must_use]
pub fn none_of_equal<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().all(|e| e != value)
}

/// Returns `true` if exactly one element of `seq` satisfies `pred`.
#[inline]
#[must_use]
pub fn one_of<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    let mut matches = seq.iter().filter(|e| pred(e));
    matches.next().is_some() && matches.next().is_none()
}

/// Returns `true` if exactly one element of `seq` equals `value`.
#[inline]
#[must_use]
pub fn one_of_equal<T: PartialEq>(seq: &[T], value: &T) -> bool {
    one_of(seq, |e| e == value)
}
