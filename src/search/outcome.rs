//! Search results.

/// The conventional "not found" marker: an index outside every valid range.
pub const NOT_FOUND_SENTINEL: isize = -1;

/// The result of a single search.
///
/// `Found` carries a 0-based index holding the target. With duplicate keys
/// it is *some* matching index, not necessarily the first.
///
/// # Examples
///
/// ```rust
/// use interpolation_search::search::{NOT_FOUND_SENTINEL, SearchOutcome};
///
/// assert_eq!(SearchOutcome::Found(3).index(), Some(3));
/// assert_eq!(SearchOutcome::NotFound.to_sentinel(), NOT_FOUND_SENTINEL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchOutcome {
    /// The target was found at this index.
    Found(usize),
    /// The target does not occur in the sequence.
    NotFound,
}

impl SearchOutcome {
    /// Returns the matching index, if any.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// Returns `true` if the target was found.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the index as a signed integer, or [`NOT_FOUND_SENTINEL`].
    ///
    /// Indices that do not fit in `isize` cannot occur for in-memory slices
    /// of non-zero-sized elements.
    #[inline]
    #[must_use]
    pub fn to_sentinel(self) -> isize {
        self.index()
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(NOT_FOUND_SENTINEL)
    }
}

impl From<SearchOutcome> for Option<usize> {
    #[inline]
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl From<Option<usize>> for SearchOutcome {
    #[inline]
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

/// A search outcome together with the number of probes it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeReport {
    /// Where the target was found, if anywhere.
    pub outcome: SearchOutcome,
    /// Number of elements inspected at interpolated positions.
    pub probes: usize,
}

impl ProbeReport {
    pub(crate) const fn new(outcome: SearchOutcome, probes: usize) -> Self {
        Self { outcome, probes }
    }
}
