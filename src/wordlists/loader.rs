//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {0:?} contains no words")]
    Empty(PathBuf),
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lower-cased; blank lines are skipped. Lines with
/// anything other than letters `a`..=`z` are skipped with a warning. File
/// order is kept.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_analyser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_analyser::wordlists::loader::words_from_slice;
/// use wordle_analyser::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Check if `word` is non-empty and made only of letters `a`..=`z`
#[inline]
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .filter(|word| {
            let valid = is_valid_word(word);
            if !valid {
                log::warn!("Skipping \"{word}\": not made of letters a-z");
            }
            valid
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_words() {
        let input = &["crane", "slate", "cat"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate", "cat"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn lines_trimmed_and_blank_skipped() {
        let words = words_from_lines("cat\n\n  Dog \r\nbird\n");
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn lines_with_other_characters_skipped() {
        let words = words_from_lines("don't\ncrane\nwell-being\ncafé\nSlate\nr2d2\n");
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn valid_words() {
        assert!(is_valid_word("crane"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("don't"));
        assert!(!is_valid_word("Crane"));
        assert!(!is_valid_word("naïve"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join("wordle_analyser_loader_test.txt");
        fs::write(&path, "bat\ncat\n\nhat\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["bat", "cat", "hat"]);

        fs::write(&path, "\n  \nit's\n").unwrap();
        assert!(matches!(
            load_from_file(&path),
            Err(WordListError::Empty(_))
        ));

        fs::remove_file(&path).unwrap();
    }
}
