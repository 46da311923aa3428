//! Game wrapper that keeps every attempt

use super::Game;
use crate::core::Attempt;

/// Forwards to an inner game and records each guess with its result
#[derive(Debug, Clone)]
pub struct Recorder<G> {
    inner: G,
    attempts: Vec<Attempt>,
}

impl<G: Game> Recorder<G> {
    /// Wrap `inner` with no attempts recorded yet
    #[must_use]
    pub const fn new(inner: G) -> Self {
        Self {
            inner,
            attempts: Vec::new(),
        }
    }

    /// Attempts in submission order, including any past the guess budget
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn into_attempts(self) -> Vec<Attempt> {
        self.attempts
    }
}

impl<G: Game> Game for Recorder<G> {
    fn guess_word(&mut self, word: &str) -> String {
        let result = self.inner.guess_word(word);
        self.attempts
            .push(Attempt::new(word.to_string(), result.clone()));
        result
    }

    fn word_length(&self) -> usize {
        self.inner.word_length()
    }

    fn num_guesses(&self) -> usize {
        self.inner.num_guesses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordleGame;

    #[test]
    fn records_guesses_and_results() {
        let mut game = Recorder::new(WordleGame::new("slate"));

        assert_eq!(game.guess_word("crane"), "__*_*");
        assert_eq!(game.guess_word("slate"), "*****");
        assert_eq!(game.num_guesses(), 2);
        assert_eq!(game.word_length(), 5);

        let attempts = game.into_attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].guess(), "crane");
        assert_eq!(attempts[0].result(), "__*_*");
        assert_eq!(attempts[1].result(), "*****");
    }
}
