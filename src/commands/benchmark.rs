//! Benchmark command
//!
//! Runs many independent ladder searches over random word pairs.

use crate::core::{Dictionary, Ladder};
use crate::solver::{LadderSearch, SearchOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of start/goal pairs to search
    pub count: usize,
    /// Word length to sample from; defaults to the most common length
    pub word_len: Option<usize>,
    /// RNG seed for reproducible pair sampling
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            word_len: None,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_len: usize,
    pub total_pairs: usize,
    pub found: usize,
    pub no_path: usize,
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub total_expansions: usize,
    pub longest: Option<Ladder>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Pick the word length to benchmark
///
/// An explicit length wins; otherwise the length with the most words.
#[must_use]
pub fn benchmark_word_len(dictionary: &Dictionary, requested: Option<usize>) -> Option<usize> {
    requested.or_else(|| {
        dictionary
            .lengths()
            .into_iter()
            .max_by_key(|&(len, count)| (count, std::cmp::Reverse(len)))
            .map(|(len, _)| len)
    })
}

/// Sample random start/goal pairs of a single word length
///
/// Pairs are drawn with replacement, so a pair may repeat or have equal ends.
#[must_use]
pub fn sample_pairs(
    dictionary: &Dictionary,
    word_len: usize,
    count: usize,
    seed: u64,
) -> Vec<(String, String)> {
    let pool = dictionary.words_of_length(word_len);
    if pool.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| {
            let start = pool.choose(&mut rng)?;
            let goal = pool.choose(&mut rng)?;
            Some(((*start).to_string(), (*goal).to_string()))
        })
        .collect()
}

/// Run the benchmark
///
/// Each search is single-threaded; separate pairs run in parallel.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let word_len = benchmark_word_len(dictionary, config.word_len).unwrap_or(0);
    let seed = config.seed.unwrap_or_else(rand::random);
    let pairs = sample_pairs(dictionary, word_len, config.count, seed);

    info!(pairs = pairs.len(), word_len, seed, "benchmark starting");

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let reports: Vec<(SearchOutcome, usize)> = pairs
        .par_iter()
        .map(|(from, to)| {
            let report = LadderSearch::new(from, to, dictionary).run();
            pb.inc(1);
            (report.outcome, report.stats.expansions)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut found = 0;
    let mut total_length = 0;
    let mut min_length = usize::MAX;
    let mut max_length = 0;
    let mut total_expansions = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut longest: Option<Ladder> = None;

    for (outcome, expansions) in reports {
        total_expansions += expansions;

        if let SearchOutcome::Found(ladder) = outcome {
            let len = ladder.len();
            found += 1;
            total_length += len;
            min_length = min_length.min(len);
            max_length = max_length.max(len);
            *distribution.entry(len).or_insert(0) += 1;

            if longest.as_ref().is_none_or(|l| len > l.len()) {
                longest = Some(ladder);
            }
        }
    }

    let total_pairs = pairs.len();

    BenchmarkResult {
        word_len,
        total_pairs,
        found,
        no_path: total_pairs - found,
        average_length: if found > 0 {
            total_length as f64 / found as f64
        } else {
            0.0
        },
        min_length: if found > 0 { min_length } else { 0 },
        max_length,
        distribution,
        total_expansions,
        longest,
        duration,
        searches_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
