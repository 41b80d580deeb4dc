//! # interpolation-search
//!
//! Interpolation search over sorted integer sequences, together with the
//! random-input generator and timing harness used to benchmark it.
//!
//! ## Overview
//!
//! Interpolation search is a refinement of binary search that estimates the
//! position of the target from the values at the current bounds instead of
//! always probing the midpoint. On roughly uniformly distributed data it needs
//! `O(log log n)` probes on average; on heavily skewed data it degrades to
//! `O(n)`.
//!
//! - **Search**: [`search::interpolation_search`], [`search::SortedSequence`]
//! - **Generation**: random sorted sequences for benchmarking (`generate`)
//! - **Benchmark**: a timing harness and its printed report (`benchmark`)
//!
//! ## Feature Flags
//!
//! - `generate`: Random sorted sequence generator (pulls in `rand`)
//! - `benchmark`: Benchmark harness (implies `generate`)
//! - `cli`: The `interpolation-bench` binary
//! - `serde`: Serialization for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use interpolation_search::prelude::*;
//!
//! let sequence = [10, 20, 30, 40, 50];
//! assert_eq!(interpolation_search(&sequence, 40), SearchOutcome::Found(3));
//! assert_eq!(interpolation_search(&sequence, 45).to_sentinel(), -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use interpolation_search::prelude::*;
/// ```
pub mod prelude {
    pub use crate::search::*;

    #[cfg(feature = "generate")]
    pub use crate::generate::*;

    #[cfg(feature = "benchmark")]
    pub use crate::benchmark::*;
}

pub mod search;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "benchmark")]
pub mod benchmark;
