//! Batch solving: run the solver against every target word
//!
//! Each word's solve is self-contained and the corpus is immutable, so the
//! batch fans out over rayon's worker pool with no synchronization beyond
//! the shared word list.

use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of solving a single target word
#[derive(Debug, Clone)]
pub struct WordResult {
    pub word: String,
    pub guess_count: usize,
    pub success: bool,
}

/// Aggregate statistics over one batch run
#[derive(Debug)]
pub struct BatchReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Letters tried across every word, successful or not
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub total_time: Duration,
    pub average_time: Duration,
    /// Guess counts of solved words only
    pub guess_distribution: HashMap<usize, usize>,
    /// Solved words that needed the most letters
    pub hardest_words: Vec<(String, usize)>,
    pub unsolved_words: Vec<String>,
}

/// Solve every target word and aggregate the results
///
/// Targets are solved in parallel; collected results keep the input order,
/// so the report is identical run to run.
#[must_use]
pub fn run_batch(solver: &Solver<'_>, targets: &[Word]) -> BatchReport {
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<WordResult> = targets
        .par_iter()
        .map(|target| {
            let report = solver.solve(target);
            pb.inc(1);
            WordResult {
                word: target.text().to_string(),
                guess_count: report.guess_count(),
                success: report.success(),
            }
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    summarize(&results, total_time)
}

fn summarize(results: &[WordResult], total_time: Duration) -> BatchReport {
    let total_words = results.len();
    let solved = results.iter().filter(|r| r.success).count();
    let failed = total_words - solved;
    let total_guesses: usize = results.iter().map(|r| r.guess_count).sum();

    let solved_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guess_count)
        .sum();
    let average_guesses = if solved > 0 {
        solved_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let average_time = if total_words > 0 {
        total_time / total_words as u32
    } else {
        Duration::ZERO
    };

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guess_count).or_insert(0) += 1;
    }

    let mut hardest_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.word.clone(), r.guess_count))
        .collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    let unsolved_words: Vec<String> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.word.clone())
        .collect();

    BatchReport {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses,
        total_time,
        average_time,
        guess_distribution,
        hardest_words,
        unsolved_words,
    }
}
