//! Benchmark results and their printed form.

use std::fmt;
use std::time::Duration;

use crate::search::{SearchOutcome, interpolation_search};

/// The fixed sequence searched by the example demonstration.
pub const EXAMPLE_SEQUENCE: [i64; 5] = [10, 20, 30, 40, 50];

/// The fixed target searched by the example demonstration.
pub const EXAMPLE_TARGET: i64 = 40;

const TABLE_TITLE: &str = "Performance Analysis:";
const TABLE_HEADER: &str = "|Input Size |   | Microseconds |        | Nanoseconds |";

// =============================================================================
// Measurement
// =============================================================================

/// One timed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Number of elements in the searched sequence.
    pub size: usize,
    /// The value searched for; always an element of the sequence.
    pub target: i64,
    /// What the timed search returned.
    pub outcome: SearchOutcome,
    /// Probes the search needed for this target.
    pub probes: usize,
    /// Wall-clock time of the single timed search.
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time in whole microseconds.
    #[must_use]
    pub const fn microseconds(&self) -> u128 {
        self.elapsed.as_micros()
    }

    /// Elapsed time in whole nanoseconds.
    #[must_use]
    pub const fn nanoseconds(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

// =============================================================================
// Benchmark Report
// =============================================================================

/// All measurements of one benchmark run, in configured size order.
///
/// `Display` renders the human-readable performance table:
///
/// ```text
/// Performance Analysis:
/// |Input Size |   | Microseconds |        | Nanoseconds |
/// 10                     0                  416
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkReport {
    /// One entry per configured input size.
    pub measurements: Vec<Measurement>,
}

impl BenchmarkReport {
    /// Returns `true` if every timed search found its target.
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.measurements
            .iter()
            .all(|measurement| measurement.outcome.is_found())
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "{TABLE_TITLE}")?;
        writeln!(formatter, "{TABLE_HEADER}")?;
        for measurement in &self.measurements {
            // Nanoseconds start under the "Nanoseconds" heading, unpadded.
            writeln!(
                formatter,
                "{:<16}{:^16}{:10}{}",
                measurement.size,
                measurement.microseconds(),
                "",
                measurement.nanoseconds()
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Example Demonstration
// =============================================================================

/// The fixed example search printed before the performance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDemonstration {
    /// The searched sequence.
    pub sequence: Vec<i64>,
    /// The searched value.
    pub target: i64,
    /// The search result.
    pub outcome: SearchOutcome,
}

impl ExampleDemonstration {
    /// Searches [`EXAMPLE_TARGET`] in [`EXAMPLE_SEQUENCE`].
    #[must_use]
    pub fn run() -> Self {
        let sequence = EXAMPLE_SEQUENCE.to_vec();
        let outcome = interpolation_search(&sequence, EXAMPLE_TARGET);
        Self {
            sequence,
            target: EXAMPLE_TARGET,
            outcome,
        }
    }
}

impl fmt::Display for ExampleDemonstration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Example test:")?;
        writeln!(formatter)?;
        writeln!(formatter, "Array = {:?}", self.sequence)?;
        writeln!(formatter, "Target = {}", self.target)?;
        writeln!(
            formatter,
            "Element found at index: {}",
            self.outcome.to_sentinel()
        )
    }
}
