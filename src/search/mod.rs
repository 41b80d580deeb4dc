//! Interpolation search over sorted integer slices.
//!
//! This module provides the search engine itself:
//!
//! - [`interpolation_search`]: finds a target in a non-decreasing slice
//! - [`interpolation_search_with_probes`]: the same search, also counting probes
//! - [`SearchOutcome`]: `Found(index)` or `NotFound`
//! - [`SortedSequence`]: an owned sequence whose sortedness is established once
//!
//! # Algorithm
//!
//! The search keeps a window `[low, high]` and, while the target lies within
//! `[S[low], S[high]]`, probes the position predicted by linear interpolation:
//!
//! ```text
//! pos = low + (high - low) * (target - S[low]) / (S[high] - S[low])
//! ```
//!
//! The quotient is computed in 128-bit unsigned arithmetic and floored, so no
//! key type supported by [`InterpolationKey`] can overflow it.
//!
//! # Time Complexity
//!
//! | Input distribution      | Probes          |
//! |-------------------------|-----------------|
//! | Uniform                 | O(log log n)    |
//! | Skewed (e.g. exponential) | O(n) worst case |
//! | Target out of range     | 0               |
//!
//! # Duplicates
//!
//! When the target occurs more than once, the returned index is whichever
//! matching position the probes reach first. It is not guaranteed to be the
//! first or the last occurrence.
//!
//! # Examples
//!
//! ```rust
//! use interpolation_search::search::{SearchOutcome, interpolation_search};
//!
//! let sequence = [10, 20, 30, 40, 50];
//! assert_eq!(interpolation_search(&sequence, 40), SearchOutcome::Found(3));
//! assert_eq!(interpolation_search(&sequence, 60), SearchOutcome::NotFound);
//! assert_eq!(interpolation_search::<i32>(&[], 1), SearchOutcome::NotFound);
//! ```

mod key;
mod outcome;
mod sequence;

pub use key::InterpolationKey;
pub use outcome::{NOT_FOUND_SENTINEL, ProbeReport, SearchOutcome};
pub use sequence::{SortedSequence, UnsortedSequenceError};

/// Searches a non-decreasing slice for `target` using interpolation search.
///
/// Returns [`SearchOutcome::Found`] with an index `i` such that
/// `sequence[i] == target`, or [`SearchOutcome::NotFound`].
///
/// # Preconditions
///
/// `sequence` must be sorted in non-decreasing order. This is not checked;
/// on unsorted input the result is unspecified (but the call never panics).
///
/// # Examples
///
/// ```rust
/// use interpolation_search::search::{SearchOutcome, interpolation_search};
///
/// assert_eq!(interpolation_search(&[5], 5), SearchOutcome::Found(0));
/// assert_eq!(interpolation_search(&[5], 6), SearchOutcome::NotFound);
/// ```
#[inline]
pub fn interpolation_search<K: InterpolationKey>(sequence: &[K], target: K) -> SearchOutcome {
    probe_search(sequence, target).outcome
}

/// Searches like [`interpolation_search`] and also reports how many probes
/// the search performed.
///
/// A probe is one element comparison at an interpolated position. A target
/// outside `[sequence[0], sequence[n - 1]]` is rejected with zero probes.
///
/// # Examples
///
/// ```rust
/// use interpolation_search::search::{SearchOutcome, interpolation_search_with_probes};
///
/// let sequence: Vec<i64> = (0..1000).collect();
/// let report = interpolation_search_with_probes(&sequence, 737);
/// assert_eq!(report.outcome, SearchOutcome::Found(737));
/// assert_eq!(report.probes, 1);
/// ```
#[inline]
pub fn interpolation_search_with_probes<K: InterpolationKey>(
    sequence: &[K],
    target: K,
) -> ProbeReport {
    probe_search(sequence, target)
}

fn probe_search<K: InterpolationKey>(sequence: &[K], target: K) -> ProbeReport {
    let mut probes = 0;

    let Some(mut high) = sequence.len().checked_sub(1) else {
        return ProbeReport::new(SearchOutcome::NotFound, probes);
    };
    let mut low = 0;

    while low <= high && sequence[low] <= target && target <= sequence[high] {
        let low_value = sequence[low];
        let high_value = sequence[high];

        if low_value == high_value {
            let outcome = if low_value == target {
                SearchOutcome::Found(low)
            } else {
                SearchOutcome::NotFound
            };
            return ProbeReport::new(outcome, probes);
        }

        let position = estimate_position(low, high, low_value, high_value, target).clamp(low, high);
        probes += 1;

        match sequence[position].cmp(&target) {
            std::cmp::Ordering::Equal => {
                return ProbeReport::new(SearchOutcome::Found(position), probes);
            }
            std::cmp::Ordering::Less => low = position + 1,
            std::cmp::Ordering::Greater => {
                let Some(next_high) = position.checked_sub(1) else {
                    break;
                };
                high = next_high;
            }
        }
    }

    ProbeReport::new(SearchOutcome::NotFound, probes)
}

/// Linear interpolation of the target's position between `low` and `high`.
///
/// Requires `low_value < high_value` and `low_value <= target <= high_value`,
/// which makes every factor non-negative. Both `high - low` and
/// `target - low_value` are below 2^64, so their product fits in `u128`.
#[inline]
fn estimate_position<K: InterpolationKey>(
    low: usize,
    high: usize,
    low_value: K,
    high_value: K,
    target: K,
) -> usize {
    let index_span = (high - low) as u128;
    let value_offset = target.distance_from(low_value);
    let value_span = high_value.distance_from(low_value);

    let offset = index_span * value_offset / value_span;
    // offset <= index_span, which came from a usize
    low + usize::try_from(offset).unwrap_or(high - low)
}

static_assertions::assert_impl_all!(SearchOutcome: Send, Sync, Copy);
static_assertions::assert_impl_all!(ProbeReport: Send, Sync, Copy);
static_assertions::assert_impl_all!(SortedSequence<i64>: Send, Sync);
