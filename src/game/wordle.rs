//! Standard Wordle game with a six-guess budget

use super::Game;
use crate::core::{Feedback, MAX_GUESSES, render};
use rustc_hash::FxHashMap;

/// A Wordle game holding a secret word
#[derive(Debug, Clone)]
pub struct WordleGame {
    secret: String,
    num_guesses: usize,
}

impl WordleGame {
    /// Start a new game with `secret` as the hidden word
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            num_guesses: 0,
        }
    }

    /// Check if the guess budget has been used up
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.num_guesses >= MAX_GUESSES
    }
}

impl Game for WordleGame {
    fn guess_word(&mut self, word: &str) -> String {
        if self.is_over() {
            return String::new();
        }
        self.num_guesses += 1;
        render(&score(word, &self.secret))
    }

    fn word_length(&self) -> usize {
        self.secret.len()
    }

    fn num_guesses(&self) -> usize {
        self.num_guesses
    }
}

/// Score `guess` against `secret` using Wordle's rules
///
/// Exact matches claim their letters first; remaining letters are then
/// marked misplaced from left to right while the secret still has unclaimed
/// copies of them.
///
/// Both words are expected to be ASCII and of equal length.
///
/// # Examples
/// ```
/// use wordle_analyser::core::render;
/// use wordle_analyser::game::score;
///
/// // R O B O T vs F L O O R: second O is exact, first O is misplaced
/// assert_eq!(render(&score("robot", "floor")), ".._*_");
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> Vec<Feedback> {
    let guess = guess.as_bytes();
    let secret = secret.as_bytes();
    let mut result = vec![Feedback::Absent; guess.len()];

    let mut available: FxHashMap<u8, usize> = FxHashMap::default();
    for &ch in secret {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: exact matches
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = Feedback::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from the remaining pool
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == Feedback::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Feedback::Misplaced;
            *count -= 1;
        }
    }

    result
}
