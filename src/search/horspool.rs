use crate::search::skip::{SkipKey, SkipTable};

/// Boyer-Moore-Horspool substring search engine.
///
/// A simplification of [`BoyerMoore`](crate::search::BoyerMoore) that keeps
/// only the bad-character table, so construction is cheaper and the advance
/// rule is simpler: after any mismatch the window shifts by the table entry
/// of the haystack element aligned with the needle's final position,
/// regardless of where in the needle the mismatch occurred. Worst-case scans
/// are quadratic, but behavior on typical data is excellent.
///
/// ### Examples
///
/// ```
/// use trawl::search::BoyerMooreHorspool;
///
/// let engine = BoyerMooreHorspool::new(b"abracadabra");
/// assert_eq!(engine.search(b"abra abracad abracadabra"), Some(13));
/// ```
pub struct BoyerMooreHorspool<'a, T: SkipKey, E = fn(&T, &T) -> bool> {
    needle: &'a [T],
    skip:   T::Table,
    eq:     E,
}

impl<'a, T> BoyerMooreHorspool<'a, T>
where
    T: SkipKey + PartialEq + Clone,
{
    /// Builds the engine for `needle` using natural equality.
    #[must_use]
    pub fn new(needle: &'a [T]) -> Self {
        Self::with_eq(needle, |a, b| a == b)
    }
}

impl<'a, T, E> BoyerMooreHorspool<'a, T, E>
where
    T: SkipKey + Clone,
    E: Fn(&T, &T) -> bool,
{
    /// Builds the engine with a caller-supplied element equality used during
    /// scanning. The skip table is always keyed by natural value identity,
    /// so the skip guarantees hold for relations at least as fine as `==`.
    #[allow(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn with_eq(needle: &'a [T], eq: E) -> Self {
        let n = needle.len();
        let mut skip = T::Table::new(n, n as isize);

        // The final element is excluded: a mismatch under it must still
        // shift to any earlier occurrence.
        if let Some((_, head)) = needle.split_last() {
            for (i, element) in head.iter().enumerate() {
                skip.insert(element.clone(), (n - 1 - i) as isize);
            }
        }

        Self { needle, skip, eq }
    }

    /// Returns the start index of the leftmost match of the needle in
    /// `haystack`, or [`None`] if there is none.
    #[inline]
    #[must_use]
    pub fn search(&self, haystack: &[T]) -> Option<usize> {
        self.search_by(haystack, &self.eq)
    }

    /// Same as [`search`](BoyerMooreHorspool::search) but with `eq`
    /// overriding the engine's equality for this call. The needle element is
    /// always the first argument.
    #[allow(clippy::cast_sign_loss)]
    #[must_use]
    pub fn search_by<F>(&self, haystack: &[T], eq: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool, {
        if self.needle.is_empty() {
            return Some(0);
        }
        if self.needle.len() > haystack.len() {
            return None;
        }

        let n = self.needle.len();
        let last = haystack.len() - n;
        let mut cur = 0;

        while cur <= last {
            let mut j = n - 1;
            while eq(&self.needle[j], &haystack[cur + j]) {
                if j == 0 {
                    return Some(cur);
                }
                j -= 1;
            }
            // Entries are in 1..=n, so the window always advances.
            cur += self.skip.lookup(&haystack[cur + n - 1]) as usize;
        }

        None
    }
}

/// Finds `needle` in `haystack` with a throwaway [`BoyerMooreHorspool`]
/// engine, returning the start index of the leftmost match. Build the engine
/// directly instead when searching many haystacks for one needle.
#[inline]
#[must_use]
pub fn boyer_moore_horspool_search<T>(haystack: &[T], needle: &[T]) -> Option<usize>
where
    T: SkipKey + PartialEq + Clone, {
    BoyerMooreHorspool::new(needle).search(haystack)
}

/// Same as [`boyer_moore_horspool_search`] but with a caller-supplied
/// element equality.
#[inline]
#[must_use]
pub fn boyer_moore_horspool_search_by<T, E>(haystack: &[T], needle: &[T], eq: E) -> Option<usize>
where
    T: SkipKey + Clone,
    E: Fn(&T, &T) -> bool, {
    BoyerMooreHorspool::with_eq(needle, eq).search(haystack)
}
