//! Random sorted sequence generation.
//!
//! Benchmarks feed the search with sequences of `size` integers drawn
//! uniformly from `[1, size * 10]` and sorted ascending. Values are uniform,
//! which is the distribution interpolation search is designed for.
//!
//! # Determinism
//!
//! [`SequenceGenerator::seeded`] produces the same sequences for the same
//! seed, which makes benchmark inputs reproducible. Without a seed the
//! generator draws from OS entropy.
//!
//! # Examples
//!
//! ```rust
//! use interpolation_search::generate::{SequenceGenerator, generate_sorted};
//!
//! let sequence = generate_sorted(100);
//! assert_eq!(sequence.len(), 100);
//! assert!(sequence.windows(2).all(|pair| pair[0] <= pair[1]));
//!
//! let mut generator = SequenceGenerator::seeded(7);
//! let sequence = generator.generate(10);
//! let target = generator.pick_present(&sequence).unwrap();
//! assert!(sequence.contains(target));
//! ```

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::search::SortedSequence;

/// Each generated value lies in `[1, size * VALUE_RANGE_FACTOR]`.
pub const VALUE_RANGE_FACTOR: i64 = 10;

/// Generates a sorted sequence of `size` random values using the thread-local RNG.
///
/// Returns an empty sequence for `size == 0`.
#[must_use]
pub fn generate_sorted(size: usize) -> SortedSequence<i64> {
    SequenceGenerator::new(rand::rng()).generate(size)
}

/// Returns the largest value a sequence of `size` elements may contain.
///
/// Saturates at `i64::MAX` for sizes that would overflow.
#[must_use]
pub fn value_upper_bound(size: usize) -> i64 {
    i64::try_from(size)
        .unwrap_or(i64::MAX)
        .saturating_mul(VALUE_RANGE_FACTOR)
}

/// A source of random sorted sequences backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Creates a deterministic generator from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Wraps an existing RNG.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `size` values uniformly from `[1, size * 10]`, sorted ascending.
    pub fn generate(&mut self, size: usize) -> SortedSequence<i64> {
        if size == 0 {
            return SortedSequence::new();
        }

        let upper_bound = value_upper_bound(size);
        let elements: Vec<i64> = (0..size)
            .map(|_| self.rng.random_range(1..=upper_bound))
            .collect();

        SortedSequence::from_unsorted(elements)
    }

    /// Picks a uniformly random element of `sequence`.
    ///
    /// Returns `None` if the sequence is empty.
    pub fn pick_present(&mut self, sequence: &SortedSequence<i64>) -> Option<i64> {
        sequence.as_slice().choose(&mut self.rng).copied()
    }

    /// Consumes the generator, returning the underlying RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 10)]
    #[case(100_000, 1_000_000)]
    #[case(usize::MAX, i64::MAX)]
    fn test_value_upper_bound(#[case] size: usize, #[case] expected: i64) {
        assert_eq!(value_upper_bound(size), expected);
    }

    #[rstest]
    fn test_generate_zero_is_empty() {
        let mut generator = SequenceGenerator::seeded(1);
        assert!(generator.generate(0).is_empty());
    }

    #[rstest]
    fn test_pick_present_on_empty_is_none() {
        let mut generator = SequenceGenerator::seeded(1);
        assert_eq!(generator.pick_present(&SortedSequence::new()), None);
    }
}
