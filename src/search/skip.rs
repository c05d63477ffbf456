use std::{collections::HashMap, hash::Hash};

/// A bad-character table mapping element values to skip entries.
///
/// [`BoyerMoore`](crate::search::BoyerMoore) stores the rightmost needle
/// index of each value with a default of `-1` for absent values, while
/// [`BoyerMooreHorspool`](crate::search::BoyerMooreHorspool) stores advance
/// distances with a default of the needle length. Both defaults are supplied
/// at construction so the two engines can share one table implementation.
pub trait SkipTable<T> {
    /// Creates a table with every value mapped to `default`. The `capacity`
    /// is the needle length and is used as a sizing hint where relevant.
    fn new(capacity: usize, default: isize) -> Self;

    /// Maps `key` to `value`, replacing any previous entry.
    fn insert(&mut self, key: T, value: isize);

    /// Returns the entry for `key`, or the default when absent.
    fn lookup(&self, key: &T) -> isize;
}

/// A direct-indexed [`SkipTable`] for single-byte element types.
///
/// Indexing uses the unsigned bit pattern of the element, so `u8` and `i8`
/// share one 256-entry layout and negative values get distinct slots.
pub struct ArraySkipTable {
    entries: [isize; 256],
}

/// A hash-backed [`SkipTable`] for arbitrary hashable element types. Only
/// values present in the needle occupy space; all others fall back to the
/// default.
pub struct MapSkipTable<T> {
    entries: HashMap<T, isize>,
    default: isize,
}

impl<T: Eq + Hash> SkipTable<T> for MapSkipTable<T> {
    #[inline]
    fn new(capacity: usize, default: isize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            default,
        }
    }

    #[inline]
    fn insert(&mut self, key: T, value: isize) {
        self.entries.insert(key, value);
    }

    #[inline]
    fn lookup(&self, key: &T) -> isize {
        self.entries.get(key).copied().unwrap_or(self.default)
    }
}

/// Element types usable with the bad-character engines, selecting the table
/// layout at compile time.
///
/// The single-byte integers use [`ArraySkipTable`]; the wider primitives and
/// `char` use [`MapSkipTable`]. A custom element type opts in by pointing at
/// [`MapSkipTable`]:
///
/// ```
/// use trawl::search::{MapSkipTable, SkipKey, boyer_moore_search};
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct Codon(u8, u8, u8);
///
/// impl SkipKey for Codon {
///     type Table = MapSkipTable<Codon>;
/// }
///
/// let orf = [Codon(b'A', b'T', b'G'), Codon(b'A', b'A', b'A'), Codon(b'T', b'A', b'A')];
/// assert_eq!(boyer_moore_search(&orf, &orf[1..]), Some(1));
/// ```
pub trait SkipKey: Sized {
    /// The table representation for this element type.
    type Table: SkipTable<Self>;
}

macro_rules! impl_array_table {
    { $($ty:ty),* } => {
        $(
        impl SkipTable<$ty> for ArraySkipTable {
            #[inline]
            fn new(_capacity: usize, default: isize) -> Self {
                Self { entries: [default; 256] }
            }

            #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
            #[inline]
            fn insert(&mut self, key: $ty, value: isize) {
                self.entries[key as u8 as usize] = value;
            }

            #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
            #[inline]
            fn lookup(&self, key: &$ty) -> isize {
                self.entries[*key as u8 as usize]
            }
        }

        impl SkipKey for $ty {
            type Table = ArraySkipTable;
        } )*
    }
}

macro_rules! impl_map_table {
    { $($ty:ty),* } => {
        $(
        impl SkipKey for $ty {
            type Table = MapSkipTable<$ty>;
        } )*
    }
}

impl_array_table!(u8, i8);
impl_map_table!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, char, bool);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_table_defaults_and_overwrites() {
        let mut table = <<u8 as SkipKey>::Table as SkipTable<u8>>::new(3, -1);
        assert_eq!(table.lookup(&b'x'), -1);

        table.insert(b'x', 0);
        table.insert(b'x', 2);
        assert_eq!(table.lookup(&b'x'), 2);
        assert_eq!(table.lookup(&b'y'), -1);
    }

    #[test]
    fn array_table_reinterprets_sign() {
        let mut table = <<i8 as SkipKey>::Table as SkipTable<i8>>::new(4, -1);
        table.insert(-1i8, 7);

        assert_eq!(table.lookup(&-1i8), 7);
        assert_eq!(table.lookup(&127i8), -1);
        assert_eq!(table.lookup(&-128i8), -1);
    }

    #[test]
    fn map_table_defaults_and_overwrites() {
        let mut table = MapSkipTable::<u32>::new(2, 8);
        assert_eq!(table.lookup(&5), 8);

        table.insert(5, 1);
        table.insert(5, 3);
        assert_eq!(table.lookup(&5), 3);
        assert_eq!(table.lookup(&6), 8);
    }
}
