//! Deterministic guess selection
//!
//! Picks the next letter to try from the frequency table: highest document
//! frequency first, ties broken by ascending character order. The total
//! order makes every solve reproducible; letters already guessed are
//! skipped.

use rustc_hash::{FxHashMap, FxHashSet};

/// Select the next letter to guess
///
/// Returns `None` when every letter with nonzero frequency has already been
/// guessed: the candidate set has no information left to offer and the
/// solve loop stops.
///
/// # Examples
/// ```
/// use hangman_solver::solver::select_guess;
/// use rustc_hash::{FxHashMap, FxHashSet};
///
/// let mut frequencies = FxHashMap::default();
/// frequencies.insert('a', 3);
/// frequencies.insert('b', 3);
/// frequencies.insert('c', 5);
///
/// let mut guessed = FxHashSet::default();
/// assert_eq!(select_guess(&frequencies, &guessed), Some('c'));
///
/// guessed.insert('c');
/// // 'a' and 'b' tie on count; the lexically smaller wins.
/// assert_eq!(select_guess(&frequencies, &guessed), Some('a'));
/// ```
#[must_use]
pub fn select_guess(
    frequencies: &FxHashMap<char, u32>,
    guessed: &FxHashSet<char>,
) -> Option<char> {
    let mut ranked: Vec<(char, u32)> = frequencies
        .iter()
        .map(|(&letter, &count)| (letter, count))
        .collect();
    // Hash-map iteration order is arbitrary; the sort restores a total order.
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .map(|(letter, _)| letter)
        .find(|letter| !guessed.contains(letter))
}
