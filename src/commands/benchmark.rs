//! Benchmark command
//!
//! Solves a random sample of dictionary words and summarises how many
//! guesses the suggestions needed.

use super::solve::solve_word;
use crate::core::Word;
use crate::session::MAX_GUESSES;
use crate::solver::ScoringConfig;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed_words: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words keyed by guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct random targets from the dictionary
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: usize) -> Vec<Word> {
    dictionary
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// Progress is reported on `progress` when given. Failed games count as
/// `MAX_GUESSES` guesses toward the average.
#[must_use]
pub fn run_benchmark(
    dictionary: &[Word],
    targets: &[Word],
    config: &ScoringConfig,
    progress: Option<&ProgressBar>,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut solved = 0;
    let mut failed_words = Vec::new();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        let guesses = match solve_word(target.text(), dictionary, config) {
            Ok(result) if result.success => {
                solved += 1;
                let n = result.guesses.len();
                *distribution.entry(n).or_insert(0) += 1;
                n
            }
            _ => {
                failed_words.push(target.text().to_string());
                MAX_GUESSES
            }
        };

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if let Some(pb) = progress {
            pb.inc(1);
            pb.set_message(target.text().to_string());
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        failed_words,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Progress bar in the style used for long runs
#[must_use]
pub fn benchmark_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
