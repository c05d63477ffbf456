use crate::search::{
    skip::{SkipKey, SkipTable},
    tables::suffix_table,
};

/// Boyer-Moore substring search engine.
///
/// Construction builds a bad-character table and a good-suffix table from
/// the needle in `O(len)` time (plus table initialization); the engine then
/// reuses them across any number of [`search`](BoyerMoore::search) calls.
/// Each alignment is compared right to left, and on a mismatch the window
/// advances by the larger of the two table shifts, which makes the scan
/// sublinear on typical data.
///
/// Searching takes `&self`, so one engine can serve many threads at once.
///
/// ### Examples
///
/// ```
/// use trawl::search::BoyerMoore;
///
/// let engine = BoyerMoore::new(b"ANPANMAN");
/// assert_eq!(engine.search(b"NOW AN FOWE\x90ER ANNMAN THE ANPANMANEND"), Some(26));
/// assert_eq!(engine.search(b"NOT FOUND TEXT"), None);
/// ```
pub struct BoyerMoore<'a, T: SkipKey, E = fn(&T, &T) -> bool> {
    needle: &'a [T],
    skip:   T::Table,
    suffix: Vec<usize>,
    eq:     E,
}

impl<'a, T> BoyerMoore<'a, T>
where
    T: SkipKey + PartialEq + Clone,
{
    /// Builds the engine for `needle` using natural equality. The needle may
    /// be empty, in which case every search reports a match at index 0.
    #[must_use]
    pub fn new(needle: &'a [T]) -> Self {
        Self::with_eq(needle, |a, b| a == b)
    }
}

impl<'a, T, E> BoyerMoore<'a, T, E>
where
    T: SkipKey + PartialEq + Clone,
    E: Fn(&T, &T) -> bool,
{
    /// Builds the engine with a caller-supplied element equality used during
    /// scanning. The tables are always keyed by natural value identity, so
    /// the skip guarantees hold for relations at least as fine as `==`.
    #[allow(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn with_eq(needle: &'a [T], eq: E) -> Self {
        let mut skip = T::Table::new(needle.len(), -1);
        for (i, element) in needle.iter().enumerate() {
            skip.insert(element.clone(), i as isize);
        }

        Self {
            needle,
            skip,
            suffix: suffix_table(needle),
            eq,
        }
    }

    /// Returns the start index of the leftmost match of the needle in
    /// `haystack`, or [`None`] if there is none.
    #[inline]
    #[must_use]
    pub fn search(&self, haystack: &[T]) -> Option<usize> {
        self.search_by(haystack, &self.eq)
    }

    /// Same as [`search`](BoyerMoore::search) but with `eq` overriding the
    /// engine's equality for this call. The needle element is always the
    /// first argument.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
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
            // Compare right to left; j counts the elements still unmatched.
            let mut j = n;
            while eq(&self.needle[j - 1], &haystack[cur + j - 1]) {
                j -= 1;
                if j == 0 {
                    return Some(cur);
                }
            }

            let k = self.skip.lookup(&haystack[cur + j - 1]);
            let mismatch_shift = j as isize - k - 1;
            if k < j as isize && mismatch_shift > self.suffix[j] as isize {
                cur += mismatch_shift as usize;
            } else {
                cur += self.suffix[j];
            }
        }

        None
    }
}

/// Finds `needle` in `haystack` with a throwaway [`BoyerMoore`] engine,
/// returning the start index of the leftmost match. Build the engine
/// directly instead when searching many haystacks for one needle, so that
/// the tables amortize across calls.
#[inline]
#[must_use]
pub fn boyer_moore_search<T>(haystack: &[T], needle: &[T]) -> Option<usize>
where
    T: SkipKey + PartialEq + Clone, {
    BoyerMoore::new(needle).search(haystack)
}

/// Same as [`boyer_moore_search`] but with a caller-supplied element
/// equality.
#[inline]
#[must_use]
pub fn boyer_moore_search_by<T, E>(haystack: &[T], needle: &[T], eq: E) -> Option<usize>
where
    T: SkipKey + PartialEq + Clone,
    E: Fn(&T, &T) -> bool, {
    BoyerMoore::with_eq(needle, eq).search(haystack)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_leftmost_occurrence() {
        assert_eq!(boyer_moore_search(b"abra abracad abracadabra", b"abracadabra"), Some(13));
        assert_eq!(boyer_moore_search(b"ABC ABCDAB ABCDABCDABDE", b"ABCDABD"), Some(15));
        assert_eq!(boyer_moore_search(b"aaaaab", b"ab"), Some(4));
    }

    #[test]
    fn misses_return_none() {
        assert_eq!(boyer_moore_search(b"NOT FOUND TEXT", b"XYZ"), None);
        assert_eq!(boyer_moore_search(b"short", b"much longer needle"), None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(boyer_moore_search::<u8>(b"corpus", b""), Some(0));
        assert_eq!(boyer_moore_search::<u8>(b"", b""), Some(0));
        assert_eq!(boyer_moore_search::<u8>(b"", b"A"), None);
    }

    #[test]
    fn engine_reuse_is_stable() {
        let engine = BoyerMoore::new(b"cat");
        assert_eq!(engine.search(b"concatenate"), Some(3));
        assert_eq!(engine.search(b"the cat sat"), Some(4));
        assert_eq!(engine.search(b"dog"), None);
        assert_eq!(engine.search(b"concatenate"), Some(3));
    }

    #[test]
    fn custom_equality_changes_matches() {
        // A relation refining `==` can only remove matches.
        assert_eq!(boyer_moore_search(b"one_two", b"_two"), Some(3));
        let refined = boyer_moore_search_by(b"one_two", b"_two", |a, b| a == b && *a != b'_');
        assert_eq!(refined, None);

        // A bijective recoding of `==` leaves results unchanged.
        let engine = BoyerMoore::with_eq(b"cat", |a: &u8, b: &u8| !a == !b);
        assert_eq!(engine.search(b"concatenate"), Some(3));
        assert_eq!(engine.search(b"dog"), None);
    }

    #[test]
    fn non_byte_elements_use_the_map_table() {
        let haystack = [5u32, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(boyer_moore_search(&haystack, &[1, 5, 9]), Some(3));
        assert_eq!(boyer_moore_search(&haystack, &[9, 9]), None);
    }
}
