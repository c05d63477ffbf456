use std::cmp::Ordering;

/// Clamps `value` into the closed range `[lo, hi]` using natural ordering.
///
/// Unlike [`Ord::clamp`], only `PartialOrd` is required and the bounds are
/// not validated; callers supply `lo <= hi`. The value is compared against
/// `lo` first, so with inverted bounds the low bound wins.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if hi < value {
        hi
    } else {
        value
    }
}

/// Clamps `value` into `[lo, hi]` under a caller-supplied ordering, for
/// element types whose natural ordering is absent or not the one wanted.
#[inline]
#[must_use]
pub fn clamp_by<T, F>(value: T, lo: T, hi: T, compare: F) -> T
where
    F: Fn(&T, &T) -> Ordering, {
    if compare(&value, &lo) == Ordering::Less {
        lo
    } else if compare(&hi, &value) == Ordering::Less {
        hi
    } else {
        value
    }
}

/// Clamps every element of `seq` into `[lo, hi]` in place.
#[inline]
pub fn clamp_all<T: PartialOrd + Clone>(seq: &mut [T], lo: &T, hi: &T) {
    for value in seq {
        if *value < *lo {
            *value = lo.clone();
        } else if *hi < *value {
            *value = hi.clone();
        }
    }
}
