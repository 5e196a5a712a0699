//! Single-word solving command
//!
//! Normalizes the user-supplied word, adds it to the corpus the way the
//! batch does for its targets, plays one game against it, and keeps the
//! full guess trace for display.

use crate::core::{Word, WordError};
use crate::solver::{SolveReport, Solver};
use crate::wordlists::Corpus;

/// A solved (or failed) single word together with its trace
pub struct SolveResult {
    pub target: String,
    pub report: SolveReport,
}

/// Solve one word given as raw CLI text
///
/// The text is trimmed and lowercased before validation, mirroring what the
/// ingestion layer does to file input. The word is added to the corpus
/// first, so it is always findable; whether the budget suffices is still up
/// to the solve.
///
/// # Errors
///
/// Returns `WordError` if the normalized text is empty or contains
/// characters outside the alphabet.
pub fn solve_word(corpus: &mut Corpus, text: &str) -> Result<SolveResult, WordError> {
    let target = Word::new(text.trim().to_lowercase())?;
    corpus.augment([target.clone()]);

    let solver = Solver::new(corpus.words());
    let report = solver.solve(&target);
    Ok(SolveResult {
        target: target.text().to_string(),
        report,
    })
}
