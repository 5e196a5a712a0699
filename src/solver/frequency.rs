//! Letter document frequency over a candidate set
//!
//! Given the surviving candidates, counts in how many of them each distinct
//! letter occurs at least once. This is a document frequency, not an
//! occurrence count: a letter appearing three times in one word still
//! contributes 1 for that word. The guess selector ranks letters by it.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Count, for each letter, the number of candidates containing it
///
/// Hyphens never appear in the result. An empty candidate set yields an
/// empty map. Input order is irrelevant to the result.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::letter_frequencies;
///
/// let words = [Word::new("cer").unwrap(), Word::new("cot").unwrap()];
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let frequencies = letter_frequencies(&candidates);
/// assert_eq!(frequencies.get(&'c'), Some(&2));
/// assert_eq!(frequencies.get(&'e'), Some(&1));
/// assert_eq!(frequencies.get(&'z'), None);
/// ```
#[must_use]
pub fn letter_frequencies(candidates: &[&Word]) -> FxHashMap<char, u32> {
    let mut counts = FxHashMap::default();
    for word in candidates {
        // `letters()` is already deduplicated, so each word counts once.
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn empty_candidates_yield_empty_map() {
        assert!(letter_frequencies(&[]).is_empty());
    }

    #[test]
    fn counts_words_not_occurrences() {
        let list = words(&["coco"]); // two c's, two o's
        let candidates: Vec<&Word> = list.iter().collect();

        let frequencies = letter_frequencies(&candidates);
        assert_eq!(frequencies.get(&'c'), Some(&1));
        assert_eq!(frequencies.get(&'o'), Some(&1));
    }

    #[test]
    fn counts_across_candidates() {
        let list = words(&["cer", "cot", "cad"]);
        let candidates: Vec<&Word> = list.iter().collect();

        let frequencies = letter_frequencies(&candidates);
        assert_eq!(frequencies.get(&'c'), Some(&3));
        assert_eq!(frequencies.get(&'e'), Some(&1));
        assert_eq!(frequencies.get(&'o'), Some(&1));
        assert_eq!(frequencies.get(&'t'), Some(&1));
        assert_eq!(frequencies.get(&'a'), Some(&1));
        assert_eq!(frequencies.get(&'d'), Some(&1));
        assert_eq!(frequencies.get(&'r'), Some(&1));
        assert_eq!(frequencies.len(), 7);
    }

    #[test]
    fn hyphen_is_never_counted() {
        let list = words(&["du-te", "nu-mi"]);
        let candidates: Vec<&Word> = list.iter().collect();

        let frequencies = letter_frequencies(&candidates);
        assert_eq!(frequencies.get(&'-'), None);
        assert_eq!(frequencies.get(&'u'), Some(&2));
    }

    #[test]
    fn input_order_does_not_matter() {
        let list = words(&["cer", "cot", "cad"]);
        let forward: Vec<&Word> = list.iter().collect();
        let backward: Vec<&Word> = list.iter().rev().collect();

        assert_eq!(letter_frequencies(&forward), letter_frequencies(&backward));
    }

    #[test]
    fn diacritics_are_counted_like_any_letter() {
        let list = words(&["țară", "țeapă"]);
        let candidates: Vec<&Word> = list.iter().collect();

        let frequencies = letter_frequencies(&candidates);
        assert_eq!(frequencies.get(&'ț'), Some(&2));
        assert_eq!(frequencies.get(&'ă'), Some(&2));
        assert_eq!(frequencies.get(&'ș'), None);
    }
}
