//! The timing loop.

use std::hint::black_box;
use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;

use super::config::{BenchmarkConfig, ConfigError};
use super::report::{BenchmarkReport, Measurement};
use crate::generate::SequenceGenerator;
use crate::search::{interpolation_search, interpolation_search_with_probes};

/// Generates one random sorted sequence per configured size and times a
/// single search for an element known to be present.
///
/// Timing is observational only: inputs and the searched value never depend
/// on previous measurements.
///
/// # Examples
///
/// ```rust
/// use interpolation_search::benchmark::{BenchmarkConfig, BenchmarkHarness};
///
/// let config = BenchmarkConfig {
///     sizes: vec![10, 100],
///     seed: Some(1),
/// };
/// let mut harness = BenchmarkHarness::new(config).unwrap();
/// let report = harness.run();
/// assert_eq!(report.measurements.len(), 2);
/// assert!(report.all_found());
/// ```
#[derive(Debug)]
pub struct BenchmarkHarness<R = StdRng> {
    config: BenchmarkConfig,
    generator: SequenceGenerator<R>,
}

impl BenchmarkHarness<StdRng> {
    /// Creates a harness whose RNG follows `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: BenchmarkConfig) -> Result<Self, ConfigError> {
        let generator = config
            .seed
            .map_or_else(SequenceGenerator::from_os_rng, SequenceGenerator::seeded);
        Self::with_generator(config, generator)
    }
}

impl<R: Rng> BenchmarkHarness<R> {
    /// Creates a harness around an existing generator; `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_generator(
        config: BenchmarkConfig,
        generator: SequenceGenerator<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    /// Returns the configuration this harness runs.
    #[must_use]
    pub const fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Measures every configured size once, in order.
    pub fn run(&mut self) -> BenchmarkReport {
        tracing::info!(
            sizes = ?self.config.sizes,
            seed = ?self.config.seed,
            "Starting interpolation search benchmark"
        );

        let sizes = self.config.sizes.clone();
        let measurements: Vec<Measurement> = sizes
            .into_iter()
            .filter_map(|size| self.measure(size))
            .collect();

        tracing::info!(
            measurements = measurements.len(),
            "Interpolation search benchmark finished"
        );
        BenchmarkReport { measurements }
    }

    fn measure(&mut self, size: usize) -> Option<Measurement> {
        let sequence = self.generator.generate(size);
        let Some(target) = self.generator.pick_present(&sequence) else {
            tracing::warn!(size, "Skipping size with no elements to search for");
            return None;
        };

        let start = Instant::now();
        let outcome = interpolation_search(black_box(sequence.as_slice()), black_box(target));
        let elapsed = start.elapsed();
        let outcome = black_box(outcome);

        // Counted outside the timed region.
        let probes = interpolation_search_with_probes(&sequence, target).probes;

        tracing::debug!(
            size,
            target,
            index = outcome.to_sentinel(),
            probes,
            elapsed_ns = elapsed.as_nanos(),
            "Measured search"
        );
        if !outcome.is_found() {
            tracing::warn!(size, target, "Search missed a target present in the sequence");
        }

        Some(Measurement {
            size,
            target,
            outcome,
            probes,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_rejects_invalid_config() {
        let config = BenchmarkConfig {
            sizes: vec![0],
            seed: None,
        };
        assert_eq!(
            BenchmarkHarness::new(config).unwrap_err(),
            ConfigError::ZeroSize
        );
    }

    #[rstest]
    fn test_measure_zero_size_is_skipped() {
        let mut harness =
            BenchmarkHarness::new(BenchmarkConfig::default().with_seed(Some(3))).unwrap();
        assert!(harness.measure(0).is_none());
    }

    #[rstest]
    fn test_measure_records_found_target() {
        let mut harness =
            BenchmarkHarness::new(BenchmarkConfig::default().with_seed(Some(3))).unwrap();
        let measurement = harness.measure(1_000).unwrap();

        assert_eq!(measurement.size, 1_000);
        assert!(measurement.outcome.is_found());
        assert!(measurement.probes >= 1);
    }
}
