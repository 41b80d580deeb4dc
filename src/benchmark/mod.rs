//! Benchmark harness for interpolation search.
//!
//! For each configured input size the harness generates a random sorted
//! sequence, picks a value known to be present, times one search, and
//! collects the result into a [`BenchmarkReport`]:
//!
//! - [`BenchmarkConfig`]: sizes and seed, layered from defaults and environment
//! - [`BenchmarkHarness`]: runs the measurements
//! - [`BenchmarkReport`] / [`Measurement`]: results, rendered as a table
//! - [`ExampleDemonstration`]: the fixed `[10, 20, 30, 40, 50]` search
//!
//! # Logging
//!
//! The harness emits `tracing` events: one `info` event per run, a `debug`
//! event per measurement (including the probe count), and a `warn` event if
//! a present target is ever reported missing. Installing a subscriber is left
//! to the binary.
//!
//! # Examples
//!
//! ```rust
//! use interpolation_search::benchmark::{BenchmarkConfig, BenchmarkHarness, ExampleDemonstration};
//!
//! println!("{}", ExampleDemonstration::run());
//!
//! let config = BenchmarkConfig::default().with_sizes(Some(vec![10, 100])).with_seed(Some(42));
//! let report = BenchmarkHarness::new(config).unwrap().run();
//! println!("{report}");
//! ```

mod config;
mod harness;
mod report;

pub use config::{
    BenchmarkConfig, ConfigError, DEFAULT_SIZES, SEED_ENV_VAR, SIZES_ENV_VAR, parse_sizes,
};
pub use harness::BenchmarkHarness;
pub use report::{
    BenchmarkReport, EXAMPLE_SEQUENCE, EXAMPLE_TARGET, ExampleDemonstration, Measurement,
};
