//! Benchmark command
//!
//! Plays full games against a sample of dictionary words and summarizes how
//! many misses the solver needed.

use super::solve::{SolveConfig, solve_word};
use crate::core::WordSet;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of secret words to play
    pub count: usize,
    /// Seed for sampling secret words; random when `None`
    pub seed: Option<u64>,
    pub max_misses: Option<usize>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            max_misses: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_misses: usize,
    pub total_guesses: usize,
    pub average_misses: f64,
    pub average_guesses: f64,
    pub min_misses: usize,
    pub max_misses: usize,
    /// Number of games per miss count
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets the solver did not pin down
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` secret words from `dictionary`
///
/// Words are sorted before shuffling, so a fixed seed always yields the same
/// sample for the same dictionary.
#[must_use]
pub fn sample_secrets(dictionary: &WordSet, count: usize, seed: Option<u64>) -> Vec<String> {
    let mut words: Vec<String> = dictionary
        .sorted()
        .into_iter()
        .map(|word| word.text().to_string())
        .collect();

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    words.shuffle(&mut rng);
    words.truncate(count);
    words
}

/// Run benchmark on sampled secret words
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game fails.
pub fn run_benchmark(dictionary: &WordSet, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let secrets = sample_secrets(dictionary, config.count, config.seed);
    info!("benchmarking {} secret words", secrets.len());

    let progress = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let style = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
    )?
    .progress_chars("█░");
    progress.set_style(style);

    let start = Instant::now();
    let mut solved = 0;
    let mut total_misses = 0;
    let mut total_guesses = 0;
    let mut min_misses = usize::MAX;
    let mut max_misses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for secret in &secrets {
        progress.set_message(secret.clone());

        let mut solve_config = SolveConfig::new(secret.clone());
        solve_config.max_misses = config.max_misses;
        let result = solve_word(solve_config, dictionary)?;

        if result.success() {
            solved += 1;
        } else {
            warn!("failed to solve '{secret}': {:?}", result.status);
            failures.push(secret.clone());
        }

        total_misses += result.misses;
        total_guesses += result.steps.len();
        min_misses = min_misses.min(result.misses);
        max_misses = max_misses.max(result.misses);
        *distribution.entry(result.misses).or_insert(0) += 1;

        progress.inc(1);
    }

    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = secrets.len();
    let games = total_words.max(1) as f64;

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_misses,
        total_guesses,
        average_misses: total_misses as f64 / games,
        average_guesses: total_guesses as f64 / games,
        min_misses: if total_words == 0 { 0 } else { min_misses },
        max_misses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordSet {
        [
            "cat", "car", "cot", "cut", "dog", "dig", "bat", "bag", "hat", "hit", "cart", "care",
            "dart", "dare", "bare",
        ]
        .into_iter()
        .collect()
    }

    fn quiet(count: usize, seed: u64) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(count);
        config.seed = Some(seed);
        config.show_progress = false;
        config
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let first = sample_secrets(&dictionary(), 5, Some(7));
        let second = sample_secrets(&dictionary(), 5, Some(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn sample_is_capped_by_dictionary_size() {
        let sample = sample_secrets(&dictionary(), 100, Some(1));
        assert_eq!(sample.len(), dictionary().len());
    }

    #[test]
    fn benchmark_solves_every_dictionary_word() {
        let dictionary = dictionary();
        let result = run_benchmark(&dictionary, &quiet(dictionary.len(), 42)).unwrap();

        assert_eq!(result.total_words, dictionary.len());
        assert_eq!(result.solved, dictionary.len());
        assert!(result.failures.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), result.total_words);
        assert!(result.min_misses <= result.max_misses);
    }

    #[test]
    fn benchmark_counts_failures_with_miss_limit() {
        let dictionary = dictionary();
        let mut config = quiet(dictionary.len(), 3);
        config.max_misses = Some(0);

        let result = run_benchmark(&dictionary, &config).unwrap();
        assert_eq!(result.solved + result.failures.len(), result.total_words);
        assert_eq!(result.total_misses, 0);
    }

    #[test]
    fn benchmark_empty_sample() {
        let result = run_benchmark(&dictionary(), &quiet(0, 1)).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_misses, 0);
    }
}
