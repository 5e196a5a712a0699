//! Word list loading utilities
//!
//! Parses the two source-file formats into clean, lowercase [`Word`]s:
//!
//! * the dictionary export, one entry per line, where some lines carry a
//!   leading `>` or `<` revision marker that must be stripped;
//! * the target list, either legacy one-word-per-line or newer
//!   `field1;field2;field3` lines where the third field is the word.
//!
//! Lines that do not yield a valid word (blank, malformed, characters
//! outside the alphabet) are skipped, so downstream code only ever sees
//! usable entries.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load the dictionary file
///
/// Each line is trimmed and lowercased; a single leading `>` or `<` marker
/// is stripped. Entries that fail alphabet validation are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("dex.txt").unwrap();
/// println!("Loaded {} dictionary words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_dictionary_line).collect())
}

/// Load the target word list
///
/// Accepts both formats, even mixed within one file: lines containing `;`
/// must split into exactly three fields (the word is the third); all other
/// non-blank lines are taken whole.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_targets<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_target_line).collect())
}

/// Parse one dictionary line into a word, if it yields one
#[must_use]
pub fn parse_dictionary_line(line: &str) -> Option<Word> {
    let mut entry = line.trim().to_lowercase();
    if let Some(stripped) = entry.strip_prefix(['>', '<']) {
        entry = stripped.trim().to_string();
    }
    Word::new(entry).ok()
}

/// Parse one target-list line into a word, if it yields one
#[must_use]
pub fn parse_target_line(line: &str) -> Option<Word> {
    let line = line.trim().to_lowercase();
    let entry = if line.contains(';') {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != 3 {
            return None;
        }
        fields[2].trim()
    } else {
        line.as_str()
    };
    Word::new(entry).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_line_plain() {
        assert_eq!(parse_dictionary_line("copac").unwrap().text(), "copac");
    }

    #[test]
    fn dictionary_line_strips_markers() {
        assert_eq!(parse_dictionary_line(">pădure").unwrap().text(), "pădure");
        assert_eq!(parse_dictionary_line("<munte").unwrap().text(), "munte");
        assert_eq!(parse_dictionary_line("> cer").unwrap().text(), "cer");
    }

    #[test]
    fn dictionary_line_strips_only_one_marker() {
        // A doubled marker leaves an invalid entry behind, which is dropped.
        assert_eq!(parse_dictionary_line(">>cer"), None);
    }

    #[test]
    fn dictionary_line_lowercases() {
        assert_eq!(parse_dictionary_line("  COPAC  ").unwrap().text(), "copac");
        assert_eq!(parse_dictionary_line("Țară").unwrap().text(), "țară");
    }

    #[test]
    fn dictionary_line_skips_blank_and_invalid() {
        assert_eq!(parse_dictionary_line(""), None);
        assert_eq!(parse_dictionary_line("   "), None);
        assert_eq!(parse_dictionary_line(">"), None);
        assert_eq!(parse_dictionary_line("anul 2000"), None);
    }

    #[test]
    fn target_line_legacy_format() {
        assert_eq!(parse_target_line("munte").unwrap().text(), "munte");
        assert_eq!(parse_target_line("  Munte  ").unwrap().text(), "munte");
    }

    #[test]
    fn target_line_semicolon_format() {
        let word = parse_target_line("12;substantiv;pădure").unwrap();
        assert_eq!(word.text(), "pădure");
    }

    #[test]
    fn target_line_semicolon_format_trims_field() {
        let word = parse_target_line("1;a; copac ").unwrap();
        assert_eq!(word.text(), "copac");
    }

    #[test]
    fn target_line_wrong_field_count_is_skipped() {
        assert_eq!(parse_target_line("a;b"), None);
        assert_eq!(parse_target_line("a;b;c;d"), None);
        assert_eq!(parse_target_line("1;x;"), None); // empty third field
    }

    #[test]
    fn target_line_skips_blank_and_invalid() {
        assert_eq!(parse_target_line(""), None);
        assert_eq!(parse_target_line("două cuvinte"), None);
    }

    #[test]
    fn mixed_target_formats_in_one_file() {
        let content = "cer\n1;s;munte\n\n2;s;lac\nvale\n";
        let words: Vec<Word> = content.lines().filter_map(parse_target_line).collect();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cer", "munte", "lac", "vale"]);
    }

    #[test]
    fn dictionary_content_end_to_end() {
        let content = ">abac\n<abces\n\ncopac\nA 400-a\n>  cer\n";
        let words: Vec<Word> = content.lines().filter_map(parse_dictionary_line).collect();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["abac", "abces", "copac", "cer"]);
    }
}
