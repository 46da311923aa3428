//! A recorded guess and the result it produced

use super::is_consistent;

/// One (guess, result) pair from a single game
///
/// Attempts are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: String,
    result: String,
}

impl Attempt {
    /// Record a guess and its result
    #[must_use]
    pub const fn new(guess: String, result: String) -> Self {
        Self { guess, result }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The result string returned for the guess
    #[inline]
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Check if `candidate` could be the secret given this attempt
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        is_consistent(&self.guess, &self.result, candidate)
    }

    /// Take back the guessed word
    #[must_use]
    pub fn into_guess(self) -> String {
        self.guess
    }
}
