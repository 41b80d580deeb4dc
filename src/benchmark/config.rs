//! Benchmark configuration.
//!
//! Values are layered: compiled-in defaults, then environment variables,
//! then whatever the caller (usually the command line) overrides.

use std::env::VarError;

use thiserror::Error;

/// Input sizes benchmarked when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

/// Environment variable holding a comma-separated list of input sizes.
pub const SIZES_ENV_VAR: &str = "INTERPOLATION_BENCH_SIZES";

/// Environment variable holding the RNG seed.
pub const SEED_ENV_VAR: &str = "INTERPOLATION_BENCH_SEED";

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while building or validating a [`BenchmarkConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No input sizes were configured.
    #[error("At least one input size is required")]
    EmptySizes,

    /// An input size of zero was configured.
    #[error("Input sizes must be greater than zero: no target can be picked from an empty sequence")]
    ZeroSize,

    /// An input size could not be parsed.
    #[error("Invalid input size: {message} (got '{value}')")]
    InvalidSize {
        /// Error message.
        message: String,
        /// Actual value.
        value: String,
    },

    /// The seed could not be parsed.
    #[error("Invalid seed: {message} (got '{value}')")]
    InvalidSeed {
        /// Error message.
        message: String,
        /// Actual value.
        value: String,
    },

    /// An environment variable was present but unreadable.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),
}

// =============================================================================
// Benchmark Config
// =============================================================================

/// What the benchmark harness measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Input sizes, measured in this order.
    pub sizes: Vec<usize>,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `INTERPOLATION_BENCH_SIZES`: comma-separated sizes (default: [`DEFAULT_SIZES`])
    /// - `INTERPOLATION_BENCH_SEED`: unsigned 64-bit seed (default: random)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value or the result
    /// fails validation. Missing variables use default values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Creates a configuration from an arbitrary variable lookup.
    ///
    /// `lookup` follows the contract of [`std::env::var`].
    ///
    /// # Errors
    ///
    /// See [`BenchmarkConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let config = Self::layered_from_lookup(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Layers environment variables over the defaults without validating.
    ///
    /// Use this when further overrides follow (e.g. command-line flags);
    /// validate the final configuration, or let [`BenchmarkHarness::new`]
    /// do it.
    ///
    /// [`BenchmarkHarness::new`]: super::BenchmarkHarness::new
    ///
    /// # Errors
    ///
    /// Returns an error only if a variable is unreadable or unparsable.
    pub fn layered_from_env() -> Result<Self, ConfigError> {
        Self::layered_from_lookup(|name| std::env::var(name))
    }

    /// Like [`BenchmarkConfig::layered_from_env`], reading from `lookup`.
    ///
    /// # Errors
    ///
    /// See [`BenchmarkConfig::layered_from_env`].
    pub fn layered_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        if let Some(value) = read_optional(&lookup, SIZES_ENV_VAR)? {
            config.sizes = parse_sizes(&value)?;
        }
        if let Some(value) = read_optional(&lookup, SEED_ENV_VAR)? {
            config.seed = Some(parse_seed(&value)?);
        }

        Ok(config)
    }

    /// Replaces the sizes if `sizes` is `Some`.
    #[must_use]
    pub fn with_sizes(mut self, sizes: Option<Vec<usize>>) -> Self {
        if let Some(sizes) = sizes {
            self.sizes = sizes;
        }
        self
    }

    /// Replaces the seed if `seed` is `Some`.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySizes`] or [`ConfigError::ZeroSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }
}

fn read_optional<F>(lookup: &F, name: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(error) => Err(ConfigError::EnvVar(error)),
    }
}

/// Parses a comma-separated list of sizes such as `"10, 100,1000"`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSize`] for the first entry that is not an
/// unsigned integer.
pub fn parse_sizes(value: &str) -> Result<Vec<usize>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<usize>()
                .map_err(|error| ConfigError::InvalidSize {
                    message: error.to_string(),
                    value: entry.to_string(),
                })
        })
        .collect()
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim();
    trimmed
        .parse::<u64>()
        .map_err(|error| ConfigError::InvalidSeed {
            message: error.to_string(),
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(
        entries: &[(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Result<String, VarError> + use<> {
        let variables: HashMap<&str, &str> = entries.iter().copied().collect();
        move |name: &str| {
            variables
                .get(name)
                .map(|value| (*value).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[rstest]
    fn test_default_uses_default_sizes() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.sizes, vec![10, 100, 1_000, 10_000, 100_000]);
        assert_eq!(config.seed, None);
    }

    #[rstest]
    fn test_from_lookup_without_variables_is_default() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[rstest]
    fn test_from_lookup_reads_sizes_and_seed() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[
            (SIZES_ENV_VAR, "5, 50,500"),
            (SEED_ENV_VAR, " 42 "),
        ]))
        .unwrap();
        assert_eq!(config.sizes, vec![5, 50, 500]);
        assert_eq!(config.seed, Some(42));
    }

    #[rstest]
    fn test_from_lookup_blank_values_are_ignored() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[
            (SIZES_ENV_VAR, "  "),
            (SEED_ENV_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[rstest]
    #[case("10,abc", "abc")]
    #[case("-1", "-1")]
    fn test_from_lookup_rejects_invalid_size(#[case] raw: &'static str, #[case] bad: &str) {
        let error = BenchmarkConfig::from_lookup(lookup_from(&[(SIZES_ENV_VAR, raw)])).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidSize { ref value, .. } if value == bad));
    }

    #[rstest]
    fn test_from_lookup_rejects_invalid_seed() {
        let error =
            BenchmarkConfig::from_lookup(lookup_from(&[(SEED_ENV_VAR, "seed")])).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidSeed { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid seed: invalid digit found in string (got 'seed')"
        );
    }

    #[rstest]
    fn test_from_lookup_propagates_unreadable_variable() {
        let error = BenchmarkConfig::from_lookup(|_| {
            Err(VarError::NotUnicode(std::ffi::OsString::from("x")))
        })
        .unwrap_err();
        assert!(matches!(error, ConfigError::EnvVar(_)));
    }

    #[rstest]
    #[case("0")]
    #[case(",")]
    #[case("10,0")]
    fn test_layered_from_lookup_lets_explicit_sizes_replace_invalid_env(#[case] raw: &'static str) {
        let lookup = lookup_from(&[(SIZES_ENV_VAR, raw)]);
        assert!(BenchmarkConfig::from_lookup(&lookup).is_err());

        let config = BenchmarkConfig::layered_from_lookup(&lookup)
            .unwrap()
            .with_sizes(Some(vec![10]));
        assert_eq!(config.sizes, vec![10]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    fn test_layered_from_lookup_does_not_validate() {
        let config =
            BenchmarkConfig::layered_from_lookup(lookup_from(&[(SIZES_ENV_VAR, "0")])).unwrap();
        assert_eq!(config.sizes, vec![0]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));
    }

    #[rstest]
    fn test_layered_from_lookup_still_rejects_unparsable_values() {
        let error = BenchmarkConfig::layered_from_lookup(lookup_from(&[(SIZES_ENV_VAR, "x")]))
            .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidSize { .. }));
    }

    #[rstest]
    fn test_parse_sizes_error_does_not_name_environment() {
        let error = parse_sizes("ten").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid input size: invalid digit found in string (got 'ten')"
        );
    }

    #[rstest]
    #[case(vec![], ConfigError::EmptySizes)]
    #[case(vec![10, 0], ConfigError::ZeroSize)]
    fn test_validate_rejects(#[case] sizes: Vec<usize>, #[case] expected: ConfigError) {
        let config = BenchmarkConfig { sizes, seed: None };
        assert_eq!(config.validate(), Err(expected));
    }

    #[rstest]
    fn test_overrides_only_apply_when_present() {
        let config = BenchmarkConfig::default()
            .with_sizes(None)
            .with_seed(Some(9));
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.seed, Some(9));

        let config = config.with_sizes(Some(vec![3])).with_seed(None);
        assert_eq!(config.sizes, vec![3]);
        assert_eq!(config.seed, Some(9));
    }
}
