/// Generates a reproducible random sequence of `length` elements drawn from
/// the non-empty `alpha`. The same seed always yields the same sequence.
#[must_use]
pub fn rand_sequence<T: Clone>(alpha: &[T], length: usize, seed: u64) -> Vec<T> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length)
        .map(|_| alpha[rng.next_u32() as usize % alpha.len()].clone())
        .collect()
}
