//! Recorded outcome of one solver run

/// A secret word and how the solver did against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    word: String,
    guesses: Option<Vec<String>>,
}

impl Experiment {
    /// Record an outcome; `guesses` is `None` when the word went unsolved
    #[must_use]
    pub const fn new(word: String, guesses: Option<Vec<String>>) -> Self {
        Self { word, guesses }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Guesses in the order they were made, if the word was solved
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> Option<&[String]> {
        self.guesses.as_deref()
    }

    /// Check if the solver found the word within the guess budget
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.guesses.is_some()
    }

    /// Number of guesses taken, if the word was solved
    #[must_use]
    pub fn num_guesses(&self) -> Option<usize> {
        self.guesses.as_ref().map(Vec::len)
    }
}
