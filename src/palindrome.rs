/// Returns `true` if `seq` reads the same forward and backward. Empty and
/// single-element sequences are palindromic.
#[inline]
#[must_use]
pub fn is_palindromic<T: PartialEq>(seq: &[T]) -> bool {
    is_palindromic_by(seq, |a, b| a == b)
}

/// Same as [`is_palindromic`] but under a caller-supplied element equality,
/// such as case-insensitive comparison or base complementarity.
#[inline]
#[must_use]
pub fn is_palindromic_by<T, F>(seq: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool, {
    let mut front = 0;
    let mut back = seq.len();

    while front + 1 < back {
        back -= 1;
        if !eq(&seq[front], &seq[back]) {
            return false;
        }
        front += 1;
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_palindromes() {
        assert!(is_palindromic(b"racecar"));
        assert!(is_palindromic(b"abba"));
        assert!(!is_palindromic(b"abab"));
        assert!(!is_palindromic(b"ab"));
        assert!(is_palindromic(&[1, 2, 3, 2, 1]));
    }

    #[test]
    fn trivial_sequences() {
        assert!(is_palindromic::<u8>(b""));
        assert!(is_palindromic(b"z"));
    }

    #[test]
    fn custom_equality() {
        let nocase = |a: &u8, b: &u8| a.eq_ignore_ascii_case(b);

        assert!(is_palindromic_by(b"Racecar", nocase));
        assert!(!is_palindromic(b"Racecar"));

        // Reverse complement palindrome in the DNA sense.
        let complementary = |a: &u8, b: &u8| matches!((a, b), (b'A', b'T') | (b'T', b'A') | (b'C', b'G') | (b'G', b'C'));
        assert!(is_palindromic_by(b"GAATTC", complementary));
        assert!(!is_palindromic_by(b"GAATTG", complementary));
    }
}
