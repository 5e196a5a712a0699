//! The hangman solving algorithm
//!
//! Candidate filtering, letter document frequency, deterministic guess
//! selection, and the per-word state machine that ties them together.

mod engine;
mod frequency;
mod selection;

pub use engine::{GuessStep, MAX_INCORRECT_GUESSES, Outcome, SolveReport, Solver};
pub use frequency::letter_frequencies;
pub use selection::select_guess;
