//! Precomputed pattern tables shared by the search engines. All tables are
//! built with the natural equality of the element type; custom scan
//! predicates do not alter them.

/// Computes the classic prefix function: `prefix[i]` is the length of the
/// longest proper prefix of `pattern[..=i]` that is also a suffix of it.
pub(crate) fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut prefix = vec![0usize; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = prefix[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        prefix[i] = k;
    }

    prefix
}

/// Builds the good-suffix table for [`BoyerMoore`](crate::search::BoyerMoore).
///
/// The table has `pattern.len() + 1` entries; `suffix[j]` is the safe window
/// advance after a mismatch with `j` elements of the needle still unmatched.
/// It is derived from two prefix-function passes, one over the pattern and
/// one over its reversal.
pub(crate) fn suffix_table<T: PartialEq + Clone>(pattern: &[T]) -> Vec<usize> {
    let count = pattern.len();
    let mut suffix = vec![0usize; count + 1];
    if count == 0 {
        return suffix;
    }

    let reversed: Vec<T> = pattern.iter().rev().cloned().collect();
    let prefix = prefix_function(pattern);
    let prefix_reversed = prefix_function(&reversed);

    let whole_shift = count - prefix[count - 1];
    for entry in &mut suffix {
        *entry = whole_shift;
    }

    for i in 0..count {
        let j = count - prefix_reversed[i];
        let k = i - prefix_reversed[i] + 1;
        if suffix[j] > k {
            suffix[j] = k;
        }
    }

    suffix
}

/// Builds the failure table for
/// [`KnuthMorrisPratt`](crate::search::KnuthMorrisPratt).
///
/// The table has `pattern.len() + 1` entries; entry `0` is a `-1` sentinel
/// and entry `i` for `i >= 1` is the length of the longest proper border of
/// the first `i` elements. Construction is amortized linear: each failed
/// comparison shortens the candidate border.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<isize> {
    let count = pattern.len();
    let mut failure = vec![0isize; count + 1];
    failure[0] = -1;

    for i in 1..=count {
        let mut j = failure[i - 1];
        while j >= 0 {
            if pattern[j as usize] == pattern[i - 1] {
                break;
            }
            j = failure[j as usize];
        }
        failure[i] = j + 1;
    }

    failure
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_function_finds_borders() {
        assert_eq!(prefix_function::<u8>(b""), Vec::<usize>::new());
        assert_eq!(prefix_function(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(prefix_function(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(prefix_function(b"abcd"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn suffix_table_for_single_element() {
        assert_eq!(suffix_table(b"a"), vec![1, 1]);
    }

    #[test]
    fn suffix_table_known_values() {
        assert_eq!(suffix_table(b"ba"), vec![2, 2, 1]);
        assert_eq!(suffix_table(b"abab"), vec![2, 2, 2, 2, 1]);
    }

    #[test]
    fn suffix_table_advances_are_positive() {
        for pattern in [b"ANPANMAN".as_slice(), b"abracadabra", b"aaaa", b"abcdefg"] {
            let suffix = suffix_table(pattern);
            assert_eq!(suffix.len(), pattern.len() + 1);
            assert!(suffix.iter().all(|&s| s >= 1 && s <= pattern.len()));
        }
    }

    #[test]
    fn failure_table_known_values() {
        assert_eq!(failure_table::<u8>(b""), vec![-1]);
        assert_eq!(failure_table(b"aab"), vec![-1, 0, 1, 0]);
        assert_eq!(failure_table(b"abab"), vec![-1, 0, 0, 1, 2]);
        assert_eq!(failure_table(b"aaaa"), vec![-1, 0, 1, 2, 3]);
    }

    #[test]
    fn failure_table_entries_are_proper_borders() {
        let pattern = b"ABCDABD";
        let failure = failure_table(pattern);

        assert_eq!(failure[0], -1);
        for (i, &f) in failure.iter().enumerate().skip(1) {
            let len = usize::try_from(f).unwrap();
            assert!(len < i);
            assert_eq!(pattern[..len], pattern[i - len..i]);
        }
    }
}
