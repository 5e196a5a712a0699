//! The per-word solving state machine
//!
//! One solve owns a candidate set, a display pattern, and the guessed and
//! incorrect letter sets. Each iteration ranks the surviving candidates'
//! letters by document frequency, guesses the best untried one, applies the
//! outcome to the pattern, and narrows the candidates to the words still
//! consistent with everything observed. The loop ends when the word is fully
//! revealed, the wrong-guess budget runs out, or the candidate set can no
//! longer produce information.

use super::frequency::letter_frequencies;
use super::selection::select_guess;
use crate::core::{DisplayPattern, Word};
use rustc_hash::FxHashSet;

/// Standard hangman allowance of wrong letter guesses
pub const MAX_INCORRECT_GUESSES: usize = 6;

/// Terminal state of one solve attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every position of the secret was revealed
    Won,
    /// The sixth wrong guess was spent before the word was revealed
    Lost,
    /// The dictionary ran dry: no candidates at the start, none left
    /// mid-solve, or no untried letter with nonzero frequency
    Unsolvable,
}

/// One guessed letter and its effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    /// The guessed letter
    pub letter: char,
    /// Whether the letter occurs in the secret word
    pub hit: bool,
    /// The display pattern after applying the guess
    pub revealed: String,
    /// Candidates surviving before this guess
    pub candidates_before: usize,
    /// Candidates surviving after refiltering
    pub candidates_after: usize,
}

/// Result of solving one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// How the attempt ended
    pub outcome: Outcome,
    /// Every guess in order
    pub steps: Vec<GuessStep>,
}

impl SolveReport {
    /// Whether the secret word was fully revealed
    #[inline]
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Number of distinct letters guessed
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of wrong guesses spent
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.steps.iter().filter(|step| !step.hit).count()
    }
}

/// Automatic hangman player backed by a fixed word list
///
/// The word list is borrowed and read-only, so one `Solver` can serve any
/// number of solves, including concurrently from several threads.
pub struct Solver<'a> {
    corpus: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a solver over the given word list
    #[must_use]
    pub const fn new(corpus: &'a [Word]) -> Self {
        Self { corpus }
    }

    /// Play one full game against `secret`
    ///
    /// Terminates after at most one guess per alphabet letter. A secret that
    /// is present in the word list is always solvable in principle; whether
    /// the budget suffices depends on how crowded its length class is.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::Solver;
    ///
    /// let corpus = vec![Word::new("cer").unwrap(), Word::new("cot").unwrap()];
    /// let solver = Solver::new(&corpus);
    ///
    /// let report = solver.solve(&Word::new("cer").unwrap());
    /// assert!(report.success());
    /// ```
    #[must_use]
    pub fn solve(&self, secret: &Word) -> SolveReport {
        let mut candidates: Vec<&Word> = self
            .corpus
            .iter()
            .filter(|word| word.len() == secret.len())
            .collect();

        // Nothing of this length in the dictionary: over before it starts.
        if candidates.is_empty() {
            return SolveReport {
                outcome: Outcome::Unsolvable,
                steps: Vec::new(),
            };
        }

        let mut pattern = DisplayPattern::new(secret);
        let mut guessed: FxHashSet<char> = FxHashSet::default();
        let mut incorrect: FxHashSet<char> = FxHashSet::default();
        let mut steps: Vec<GuessStep> = Vec::new();

        let outcome = loop {
            if pattern.is_complete() {
                break Outcome::Won;
            }
            if incorrect.len() >= MAX_INCORRECT_GUESSES {
                break Outcome::Lost;
            }
            if candidates.is_empty() {
                break Outcome::Unsolvable;
            }

            let frequencies = letter_frequencies(&candidates);
            let Some(letter) = select_guess(&frequencies, &guessed) else {
                // Every informative letter is spent; guessing blind would
                // only burn the budget.
                break Outcome::Unsolvable;
            };
            guessed.insert(letter);

            let candidates_before = candidates.len();
            let hit = secret.contains(letter);
            if hit {
                pattern.reveal(secret, letter);
            } else {
                incorrect.insert(letter);
            }

            // Narrow the previous survivors; the set never grows back.
            candidates.retain(|word| !word.contains_any(&incorrect) && pattern.admits(word));

            steps.push(GuessStep {
                letter,
                hit,
                revealed: pattern.to_string(),
                candidates_before,
                candidates_after: candidates.len(),
            });
        };

        SolveReport { outcome, steps }
    }
}
