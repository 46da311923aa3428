//! Word lists for Wordle solving
//!
//! Provides an embedded default dictionary and a file loader, both exposed
//! through [`WordList`].

mod embedded;
pub mod loader;

use crate::game::Dictionary;
use std::path::Path;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordListError;

/// An in-memory dictionary keeping words in their original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Dictionary built from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(WORDS),
        }
    }

    /// Dictionary loaded from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        loader::load_from_file(path).map(|words| Self { words })
    }

    /// Number of words of any length
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn words_with_length(&self, length: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
