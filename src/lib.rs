#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Clamp scalars and sequences to a closed range.
pub mod clamp;
/// Hexadecimal encoding and decoding of unsigned integer sequences.
pub mod hex;
/// Minimum and maximum scans.
pub mod minmax;
/// Ordering checks over adjacent elements.
pub mod ordered;
/// Palindrome tests.
pub mod palindrome;
/// Partition tests and partition points.
pub mod partition;
/// Quantified predicate tests over sequences.
pub mod predicate;
/// Substring search engines with reusable pattern tables.
pub mod search;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub(crate) mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::clamp::{clamp, clamp_by};
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
    pub use crate::hex::{HexDecodeError, decode_hex, encode_hex};
    pub use crate::minmax::{minmax, minmax_element};
    pub use crate::ordered::{is_increasing, is_ordered};
    pub use crate::palindrome::is_palindromic;
    pub use crate::partition::{is_partitioned, partition_point};
    pub use crate::predicate::{all_of, any_of, none_of, one_of};
    pub use crate::search::{
        BoyerMoore, BoyerMooreHorspool, KnuthMorrisPratt, MapSkipTable, SkipKey,
        boyer_moore_horspool_search, boyer_moore_search, knuth_morris_pratt_search,
    };
}
