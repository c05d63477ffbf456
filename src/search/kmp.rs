use crate::search::tables::failure_table;

/// Knuth-Morris-Pratt substring search engine.
///
/// Construction builds a failure table of longest proper borders from the
/// needle; scanning then walks the haystack strictly left to right, never
/// re-reading an element it has already matched. The scan is `O(len)` in the
/// worst case, which makes this the conservative choice for periodic or
/// adversarial data where the skip-based engines degrade.
///
/// Unlike the bad-character engines, no table is keyed by element values, so
/// any `PartialEq` element type works without further opt-in.
///
/// ### Examples
///
/// ```
/// use trawl::search::KnuthMorrisPratt;
///
/// let engine = KnuthMorrisPratt::new(b"ABCDABD");
/// assert_eq!(engine.search(b"ABC ABCDAB ABCDABCDABDE"), Some(15));
/// ```
pub struct KnuthMorrisPratt<'a, T, E = fn(&T, &T) -> bool> {
    needle:  &'a [T],
    failure: Vec<isize>,
    eq:      E,
}

impl<'a, T> KnuthMorrisPratt<'a, T>
where
    T: PartialEq,
{
    /// Builds the engine for `needle` using natural equality.
    #[must_use]
    pub fn new(needle: &'a [T]) -> Self {
        Self::with_eq(needle, |a, b| a == b)
    }
}

impl<'a, T, E> KnuthMorrisPratt<'a, T, E>
where
    T: PartialEq,
    E: Fn(&T, &T) -> bool,
{
    /// Builds the engine with a caller-supplied element equality used during
    /// scanning. The failure table is always built with natural equality, so
    /// the advance guarantees hold for relations at least as fine as `==`.
    #[must_use]
    pub fn with_eq(needle: &'a [T], eq: E) -> Self {
        Self {
            needle,
            failure: failure_table(needle),
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

    /// Same as [`search`](KnuthMorrisPratt::search) but with `eq` overriding
    /// the engine's equality for this call. The needle element is always the
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
        let mut match_start = 0;
        let mut idx = 0;

        while match_start <= last {
            while eq(&self.needle[idx], &haystack[match_start + idx]) {
                idx += 1;
                if idx == n {
                    return Some(match_start);
                }
            }

            // failure[idx] < idx, so match_start + idx never decreases and
            // the alignment moves by at least one.
            let border = self.failure[idx];
            match_start += (idx as isize - border) as usize;
            idx = if border > 0 { border as usize } else { 0 };
        }

        None
    }
}

/// Finds `needle` in `haystack` with a throwaway [`KnuthMorrisPratt`]
/// engine, returning the start index of the leftmost match. Build the engine
/// directly instead when searching many haystacks for one needle.
#[inline]
#[must_use]
pub fn knuth_morris_pratt_search<T>(haystack: &[T], needle: &[T]) -> Option<usize>
where
    T: PartialEq, {
    KnuthMorrisPratt::new(needle).search(haystack)
}

/// Same as [`knuth_morris_pratt_search`] but with a caller-supplied element
/// equality.
#[inline]
#[must_use]
pub fn knuth_morris_pratt_search_by<T, E>(haystack: &[T], needle: &[T], eq: E) -> Option<usize>
where
    T: PartialEq,
    E: Fn(&T, &T) -> bool, {
    KnuthMorrisPratt::with_eq(needle, eq).search(haystack)
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn finds_leftmost_occurrence() {
        assert_eq!(knuth_morris_pratt_search(b"ABC ABCDAB ABCDABCDABDE", b"ABCDABD"), Some(15));
        assert_eq!(knuth_morris_pratt_search(b"abra abracad abracadabra", b"abracadabra"), Some(13));
    }

    #[test]
    fn periodic_needles_reuse_partial_matches() {
        assert_eq!(knuth_morris_pratt_search(b"aaaaaaab", b"aaab"), Some(4));
        assert_eq!(knuth_morris_pratt_search(b"abababac", b"ababac"), Some(2));
        assert_eq!(knuth_morris_pratt_search(b"aabaabaab", b"aabaab"), Some(0));
    }

    #[test]
    fn misses_return_none() {
        assert_eq!(knuth_morris_pratt_search(b"NOT FOUND TEXT", b"XYZ"), None);
        assert_eq!(knuth_morris_pratt_search(b"abababab", b"ababac"), None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(knuth_morris_pratt_search::<u8>(b"corpus", b""), Some(0));
        assert_eq!(knuth_morris_pratt_search::<u8>(b"", b""), Some(0));
        assert_eq!(knuth_morris_pratt_search::<u8>(b"", b"A"), None);
    }

    #[test]
    fn works_for_any_partial_eq_element() {
        let haystack: Vec<char> = "the quick brown fox".chars().collect();
        let needle: Vec<char> = "brown".chars().collect();
        assert_eq!(knuth_morris_pratt_search(&haystack, &needle), Some(10));

        let floats = [1.5f64, 2.5, 3.5, 4.5];
        assert_eq!(knuth_morris_pratt_search(&floats, &[2.5, 3.5]), Some(1));
    }

    #[test]
    fn probes_never_move_backward() {
        // Observes the haystack offset of every comparison through the
        // equality callback: failure-table fallbacks realign the needle but
        // never re-read an earlier haystack element.
        let haystack = b"aabaabaabaacaabaab";
        let base = haystack.as_ptr() as usize;
        let last_probe = Cell::new(0usize);

        let found = knuth_morris_pratt_search_by(haystack, b"aabaac", |a, b| {
            let probe = std::ptr::from_ref(b) as usize - base;
            assert!(probe >= last_probe.get());
            last_probe.set(probe);
            a == b
        });

        assert_eq!(found, Some(6));
        assert_eq!(last_probe.get(), 11);
    }

    #[test]
    fn custom_equality() {
        let refined = knuth_morris_pratt_search_by(b"one_two", b"_two", |a, b| a == b && *a != b'_');
        assert_eq!(refined, None);

        let engine = KnuthMorrisPratt::with_eq(b"cat", |a: &u8, b: &u8| !a == !b);
        assert_eq!(engine.search(b"concatenate"), Some(3));
    }
}
