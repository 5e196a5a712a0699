//! Hangman display pattern
//!
//! The display pattern is the per-position view of a partially revealed
//! secret word: each slot is either an unknown placeholder, a revealed
//! letter, or a hyphen. Hyphens are copied from the secret before the first
//! guess and behave like already-revealed positions.

use super::Word;
use super::alphabet::HYPHEN;
use std::fmt;

/// State of a single position in the display pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Not revealed yet, shown as `_`
    Unknown,
    /// Revealed by a correct guess
    Revealed(char),
    /// Pre-revealed hyphen, never guessed
    Hyphen,
}

/// The per-position revealed/unknown state of one secret word
///
/// Mutated only by [`DisplayPattern::reveal`], which uncovers every position
/// holding a correctly guessed letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPattern {
    slots: Vec<Slot>,
}

impl DisplayPattern {
    /// Create the initial pattern for a secret word
    ///
    /// Hyphen positions are revealed from the start; every other position is
    /// unknown.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{DisplayPattern, Word};
    ///
    /// let secret = Word::new("du-te").unwrap();
    /// let pattern = DisplayPattern::new(&secret);
    /// assert_eq!(pattern.to_string(), "__-__");
    /// ```
    #[must_use]
    pub fn new(secret: &Word) -> Self {
        let slots = secret
            .chars()
            .iter()
            .map(|&c| if c == HYPHEN { Slot::Hyphen } else { Slot::Unknown })
            .collect();
        Self { slots }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pattern has zero positions (never true for a real secret)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }

    /// Reveal `letter` at every position where the secret holds it
    ///
    /// Returns the number of newly revealed positions (0 if the letter does
    /// not occur in the secret).
    pub fn reveal(&mut self, secret: &Word, letter: char) -> usize {
        let mut revealed = 0;
        for (slot, &c) in self.slots.iter_mut().zip(secret.chars()) {
            if c == letter && *slot == Slot::Unknown {
                *slot = Slot::Revealed(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Whether every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| *slot != Slot::Unknown)
    }

    /// Whether a candidate word is consistent with the revealed positions
    ///
    /// Unknown positions admit anything; revealed positions (letters and
    /// hyphens alike) must match exactly. Candidates of a different length
    /// never match.
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        candidate.len() == self.len()
            && self
                .slots
                .iter()
                .zip(candidate.chars())
                .all(|(slot, &c)| match slot {
                    Slot::Unknown => true,
                    Slot::Revealed(letter) => c == *letter,
                    Slot::Hyphen => c == HYPHEN,
                })
    }
}

impl fmt::Display for DisplayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Unknown => write!(f, "_")?,
                Slot::Revealed(letter) => write!(f, "{letter}")?,
                Slot::Hyphen => write!(f, "{HYPHEN}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_pattern_is_all_unknown() {
        let pattern = DisplayPattern::new(&word("munte"));
        assert_eq!(pattern.len(), 5);
        assert!(!pattern.is_complete());
        assert_eq!(pattern.to_string(), "_____");
    }

    #[test]
    fn hyphens_are_pre_revealed() {
        let pattern = DisplayPattern::new(&word("abc-de"));
        assert_eq!(pattern.slot(3), Slot::Hyphen);
        assert_eq!(pattern.to_string(), "___-__");
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_uncovers_every_matching_position() {
        let secret = word("copac");
        let mut pattern = DisplayPattern::new(&secret);

        assert_eq!(pattern.reveal(&secret, 'c'), 2);
        assert_eq!(pattern.to_string(), "c___c");

        assert_eq!(pattern.reveal(&secret, 'z'), 0);
        assert_eq!(pattern.to_string(), "c___c");
    }

    #[test]
    fn reveal_is_idempotent_per_letter() {
        let secret = word("copac");
        let mut pattern = DisplayPattern::new(&secret);

        pattern.reveal(&secret, 'o');
        assert_eq!(pattern.reveal(&secret, 'o'), 0);
        assert_eq!(pattern.to_string(), "_o___");
    }

    #[test]
    fn pattern_completes_after_all_letters() {
        let secret = word("du-te");
        let mut pattern = DisplayPattern::new(&secret);

        for letter in ['d', 'u', 't', 'e'] {
            pattern.reveal(&secret, letter);
        }
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "du-te");
    }

    #[test]
    fn admits_matches_revealed_positions() {
        let secret = word("copac");
        let mut pattern = DisplayPattern::new(&secret);
        pattern.reveal(&secret, 'c');

        assert!(pattern.admits(&word("copac")));
        assert!(pattern.admits(&word("cojoc")));
        assert!(!pattern.admits(&word("capra"))); // no 'c' at position 4
        assert!(!pattern.admits(&word("banca"))); // no 'c' at position 0
    }

    #[test]
    fn admits_rejects_length_mismatch() {
        let pattern = DisplayPattern::new(&word("munte"));
        assert!(!pattern.admits(&word("mult")));
        assert!(!pattern.admits(&word("muntele")));
    }

    #[test]
    fn admits_enforces_hyphen_positions() {
        let pattern = DisplayPattern::new(&word("du-te"));
        assert!(pattern.admits(&word("da-mi")));
        assert!(!pattern.admits(&word("corte"))); // letter where the hyphen is
    }

    #[test]
    fn fully_unknown_pattern_admits_same_length_words() {
        let pattern = DisplayPattern::new(&word("munte"));
        assert!(!pattern.admits(&word("lacuri")));
        assert!(pattern.admits(&word("codru")));
        assert!(pattern.admits(&word("munte")));
    }
}
