//! interpolation-bench - times interpolation search on random sorted input
//!
//! Usage:
//!   interpolation-bench [--sizes 10,100,1000] [--seed 42] [--skip-example]
//!
//! # Environment Variables
//!
//! - `INTERPOLATION_BENCH_SIZES`: comma-separated input sizes (default: 10,100,1000,10000,100000)
//! - `INTERPOLATION_BENCH_SEED`: RNG seed for reproducible input (default: random)
//! - `RUST_LOG`: Logging level (e.g., `debug`, `interpolation_search=debug`)
//!
//! Command-line flags take precedence over environment variables.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use interpolation_search::benchmark::{BenchmarkConfig, BenchmarkHarness, ExampleDemonstration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "interpolation-bench")]
#[command(about = "Times interpolation search on random sorted sequences of increasing size")]
struct Cli {
    /// Comma-separated input sizes, e.g. `10,100,1000`
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Random seed for reproducible input
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the fixed example search
    #[arg(long)]
    skip_example: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interpolation_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = BenchmarkConfig::layered_from_env()
        .context("Failed to load benchmark configuration from environment")?
        .with_sizes(cli.sizes)
        .with_seed(cli.seed);
    let mut harness = BenchmarkHarness::new(config).context("Invalid benchmark configuration")?;

    if !cli.skip_example {
        let example = ExampleDemonstration::run();
        println!("\n\n{example}");
    }

    let report = harness.run();
    print!("{report}");

    ensure!(
        report.all_found(),
        "Interpolation search missed a target that was present in the input"
    );
    Ok(())
}
