//! The Romanian hangman alphabet
//!
//! Words are built from the lowercase Romanian letters (a-z plus the five
//! diacritics) and the hyphen. Hyphens join compound words; they are never
//! guessable letters and are revealed from the start of a game.

/// The hyphen joining compound words. Pre-revealed, never guessed.
pub const HYPHEN: char = '-';

/// Every guessable letter.
pub const LETTERS: [char; 31] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'ă', 'â', 'î', 'ș', 'ț',
];

/// Check whether a character is a guessable letter
///
/// Hyphens are not letters: they cannot be guessed and carry no frequency.
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, 'ă' | 'â' | 'î' | 'ș' | 'ț')
}

/// Check whether a word is composed solely of allowed characters
///
/// Returns `true` iff the word is non-empty and every character is either a
/// guessable letter or a hyphen. Uppercase input fails: normalization is the
/// ingestion layer's job, not the validator's.
///
/// # Examples
/// ```
/// use hangman_solver::core::alphabet::is_valid;
///
/// assert!(is_valid("copac"));
/// assert!(is_valid("brânză"));
/// assert!(is_valid("du-te"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("Copac"));
/// assert!(!is_valid("anul 2000"));
/// ```
#[must_use]
pub fn is_valid(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| is_letter(c) || c == HYPHEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alphabet_letter_is_a_letter() {
        for c in LETTERS {
            assert!(is_letter(c), "'{c}' should be a letter");
        }
    }

    #[test]
    fn hyphen_is_not_a_letter() {
        assert!(!is_letter(HYPHEN));
    }

    #[test]
    fn uppercase_and_foreign_chars_are_not_letters() {
        assert!(!is_letter('A'));
        assert!(!is_letter('É'));
        assert!(!is_letter('ş')); // cedilla variant, not the comma-below form
        assert!(!is_letter('3'));
        assert!(!is_letter(' '));
    }

    #[test]
    fn valid_words_pass() {
        assert!(is_valid("copac"));
        assert!(is_valid("țânțar"));
        assert!(is_valid("într-adevăr"));
        assert!(is_valid("a"));
    }

    #[test]
    fn invalid_words_fail() {
        assert!(!is_valid(""));
        assert!(!is_valid("Copac")); // uppercase
        assert!(!is_valid("anul2000")); // digit
        assert!(!is_valid("două cuvinte")); // space
        assert!(!is_valid("café")); // foreign letter
    }

    #[test]
    fn validation_is_idempotent() {
        for word in ["copac", "Copac", "", "du-te", "x y"] {
            assert_eq!(is_valid(word), is_valid(word));
        }
    }
}
