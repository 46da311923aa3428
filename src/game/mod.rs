//! Game collaborators
//!
//! The guessing agent never looks at a secret directly. It asks a
//! [`Dictionary`] for candidate words and submits guesses to a [`Game`],
//! which scores them against a hidden secret.

mod recorder;
mod wordle;

pub use recorder::Recorder;
pub use wordle::{WordleGame, score};

/// A source of candidate words
pub trait Dictionary {
    /// All known words with exactly `length` letters
    ///
    /// The order is stable but otherwise unspecified.
    fn words_with_length(&self, length: usize) -> Vec<String>;
}

/// A game scoring guesses against a hidden secret
pub trait Game {
    /// Submit a guess and get its result string
    ///
    /// Returns one symbol per position (`*` exact, `.` misplaced, `_` absent),
    /// or an empty string once the guess budget is used up.
    fn guess_word(&mut self, word: &str) -> String;

    /// Length of the secret word
    fn word_length(&self) -> usize;

    /// Number of guesses submitted so far, capped at the guess budget
    fn num_guesses(&self) -> usize;
}
