//! Validated word representation
//!
//! A `Word` stores a dictionary entry along with its character sequence and
//! distinct letter set. Romanian diacritics are multi-byte in UTF-8, so all
//! lengths and positions here are measured in characters, never bytes.

use super::alphabet;
use std::fmt;

/// A validated lowercase word over the Romanian alphabet plus hyphen
///
/// Construction rejects anything outside the allowed character set, so the
/// rest of the crate never has to re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    UnsupportedCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::UnsupportedCharacter(c) => {
                write!(f, "Word contains unsupported character '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input must already be trimmed and lowercase; normalization happens
    /// in the ingestion layer.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains a character that
    /// is neither an allowed letter nor a hyphen.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("pădure").unwrap();
    /// assert_eq!(word.text(), "pădure");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("Pădure").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = text
            .chars()
            .find(|&c| !alphabet::is_letter(c) && c != alphabet::HYPHEN)
        {
            return Err(WordError::UnsupportedCharacter(bad));
        }

        let chars: Vec<char> = text.chars().collect();

        // Distinct guessable letters, kept sorted for binary search.
        let mut letters: Vec<char> = chars
            .iter()
            .copied()
            .filter(|&c| c != alphabet::HYPHEN)
            .collect();
        letters.sort_unstable();
        letters.dedup();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// A `Word` is never empty; kept for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character sequence
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The character at a position (0-based)
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Distinct guessable letters in this word, sorted, hyphen excluded
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Check whether the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Check whether the word contains any letter from the given set
    #[must_use]
    pub fn contains_any(&self, letters: &rustc_hash::FxHashSet<char>) -> bool {
        self.letters.iter().any(|l| letters.contains(l))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
