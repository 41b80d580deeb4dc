//! An owned, non-decreasing sequence of keys.

use std::ops::Deref;

use thiserror::Error;

use super::{InterpolationKey, SearchOutcome, interpolation_search};

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "SortedSequence requires elements in non-decreasing order";

/// Returned by [`SortedSequence::try_from_vec`] when the input is out of order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("sequence is not sorted: element {position} is greater than element {}", .position + 1)]
pub struct UnsortedSequenceError {
    /// The first index `i` with `sequence[i] > sequence[i + 1]`.
    pub position: usize,
}

/// A sequence whose elements are known to be in non-decreasing order.
///
/// The slice-based [`interpolation_search`] trusts its caller about ordering.
/// `SortedSequence` establishes ordering once, at construction, so searches
/// through [`SortedSequence::search`] always run on valid input.
///
/// Duplicates are allowed.
///
/// # Examples
///
/// ```rust
/// use interpolation_search::search::{SearchOutcome, SortedSequence};
///
/// let sequence = SortedSequence::from_unsorted(vec![50, 10, 40, 20, 30]);
/// assert_eq!(sequence.as_slice(), &[10, 20, 30, 40, 50]);
/// assert_eq!(sequence.search(40), SearchOutcome::Found(3));
///
/// assert!(SortedSequence::try_from_vec(vec![2, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedSequence<K> {
    elements: Vec<K>,
}

impl<K: InterpolationKey> SortedSequence<K> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Sorts `elements` and wraps them.
    #[must_use]
    pub fn from_unsorted(mut elements: Vec<K>) -> Self {
        elements.sort_unstable();
        Self { elements }
    }

    /// Wraps `elements` if they are already in non-decreasing order.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedSequenceError`] naming the first out-of-order position.
    pub fn try_from_vec(elements: Vec<K>) -> Result<Self, UnsortedSequenceError> {
        match first_descent(&elements) {
            Some(position) => Err(UnsortedSequenceError { position }),
            None => Ok(Self { elements }),
        }
    }

    /// Wraps `elements` without checking their order.
    ///
    /// The caller guarantees non-decreasing order. Debug builds assert it.
    #[inline]
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<K>) -> Self {
        debug_assert!(
            first_descent(&elements).is_none(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { elements }
    }

    /// Searches for `target` with [`interpolation_search`].
    #[inline]
    pub fn search(&self, target: K) -> SearchOutcome {
        interpolation_search(&self.elements, target)
    }

    /// Returns `true` if `target` occurs in the sequence.
    #[inline]
    pub fn contains(&self, target: K) -> bool {
        self.search(target).is_found()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.elements
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the sequence, returning the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<K> {
        self.elements
    }
}

impl<K: InterpolationKey> Default for SortedSequence<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Deref for SortedSequence<K> {
    type Target = [K];

    #[inline]
    fn deref(&self) -> &[K] {
        &self.elements
    }
}

impl<K> AsRef<[K]> for SortedSequence<K> {
    #[inline]
    fn as_ref(&self) -> &[K] {
        &self.elements
    }
}

impl<K: InterpolationKey> FromIterator<K> for SortedSequence<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<K: InterpolationKey> TryFrom<Vec<K>> for SortedSequence<K> {
    type Error = UnsortedSequenceError;

    fn try_from(elements: Vec<K>) -> Result<Self, Self::Error> {
        Self::try_from_vec(elements)
    }
}

impl<K> From<SortedSequence<K>> for Vec<K> {
    fn from(sequence: SortedSequence<K>) -> Self {
        sequence.elements
    }
}

impl<'a, K> IntoIterator for &'a SortedSequence<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<K> IntoIterator for SortedSequence<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

fn first_descent<K: Ord>(elements: &[K]) -> Option<usize> {
    elements.windows(2).position(|pair| pair[0] > pair[1])
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for SortedSequence<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.elements, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for SortedSequence<K>
where
    K: InterpolationKey + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<K> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_vec(elements).map_err(serde::de::Error::custom)
    }
}
