/// Boyer-Moore engine and convenience searches.
mod boyer_moore;
/// Boyer-Moore-Horspool engine and convenience searches.
mod horspool;
/// Knuth-Morris-Pratt engine and convenience searches.
mod kmp;
/// Bad-character skip tables and their element-type dispatch.
mod skip;
/// Shared pattern table construction.
mod tables;

pub use boyer_moore::*;
pub use horspool::*;
pub use kmp::*;
pub use skip::*;
