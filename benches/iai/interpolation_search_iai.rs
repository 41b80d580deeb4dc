//! IAI-Callgrind benchmark for interpolation search.
//!
//! Measures instruction counts for one search on uniform input (constant
//! probes) and on input with a single huge outlier (linear probes).
//! Data sizes: 100, 10000, 100000.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use interpolation_search::search::{SearchOutcome, interpolation_search};
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_uniform(size: i64) -> (Vec<i64>, i64) {
    let sequence: Vec<i64> = (0..size).map(|value| value * 10).collect();
    let target = sequence[sequence.len() * 3 / 4];
    (sequence, target)
}

fn setup_skewed(size: i64) -> (Vec<i64>, i64) {
    let mut sequence: Vec<i64> = (0..size - 1).collect();
    sequence.push(i64::MAX);
    (sequence, size - 2)
}

// Uniform input benchmarks
#[library_benchmark]
#[bench::with_setup(setup_uniform(100))]
fn uniform_100(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

#[library_benchmark]
#[bench::with_setup(setup_uniform(10_000))]
fn uniform_10000(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

#[library_benchmark]
#[bench::with_setup(setup_uniform(100_000))]
fn uniform_100000(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

// Skewed input benchmarks (worst case)
#[library_benchmark]
#[bench::with_setup(setup_skewed(100))]
fn skewed_100(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

#[library_benchmark]
#[bench::with_setup(setup_skewed(10_000))]
fn skewed_10000(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

#[library_benchmark]
#[bench::with_setup(setup_skewed(100_000))]
fn skewed_100000(input: (Vec<i64>, i64)) -> SearchOutcome {
    let (sequence, target) = input;
    black_box(interpolation_search(black_box(&sequence), black_box(target)))
}

library_benchmark_group!(
    name = interpolation_search_group;
    benchmarks =
        uniform_100, uniform_10000, uniform_100000,
        skewed_100, skewed_10000, skewed_100000
);

main!(library_benchmark_groups = interpolation_search_group);
