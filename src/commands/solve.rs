//! Word solving command
//!
//! Runs the agent against one secret word and returns each step.

use crate::core::Attempt;
use crate::game::{Dictionary, Recorder, WordleGame};
use crate::solver::find_word;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("target \"{0}\" must be non-empty and contain only lowercase letters")]
    InvalidTarget(String),
}

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    /// Target words are lower-cased
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self {
            target: target.trim().to_lowercase(),
        }
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    /// Every guess submitted, with the result the game returned
    pub attempts: Vec<Attempt>,
    /// Whether the dictionary had the target at all
    pub in_dictionary: bool,
}

/// Solve a specific word with words drawn from `dictionary`
///
/// # Errors
///
/// Returns `SolveError::InvalidTarget` if the target is empty or has
/// characters outside `a`..=`z`.
pub fn solve_word<D: Dictionary + ?Sized>(
    config: SolveConfig,
    dictionary: &D,
) -> Result<SolveResult, SolveError> {
    let target = config.target;
    if target.is_empty() || !target.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(SolveError::InvalidTarget(target));
    }

    let in_dictionary = dictionary
        .words_with_length(target.len())
        .iter()
        .any(|w| *w == target);
    if !in_dictionary {
        log::warn!("{target} is not in the dictionary and cannot be found");
    }

    let mut game = Recorder::new(WordleGame::new(target.as_str()));
    let success = find_word(dictionary, &mut game).is_some();

    Ok(SolveResult {
        target,
        success,
        attempts: game.into_attempts(),
        in_dictionary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use crate::wordlists::WordList;

    fn rhymes() -> WordList {
        ["sat", "bat", "pat", "cat", "rat", "hat", "fat", "mat"]
            .into_iter()
            .collect()
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = rhymes();
        let result = solve_word(SolveConfig::new("hat"), &dictionary).unwrap();

        assert!(result.success);
        assert!(result.in_dictionary);
        let guesses: Vec<&str> = result.attempts.iter().map(Attempt::guess).collect();
        assert_eq!(guesses, vec!["bat", "cat", "fat", "hat"]);
        assert_eq!(result.attempts[0].result(), "_**");
        assert_eq!(result.attempts[3].result(), "***");
    }

    #[test]
    fn solve_word_normalises_target() {
        let dictionary = rhymes();
        let result = solve_word(SolveConfig::new("  BAT "), &dictionary).unwrap();

        assert_eq!(result.target, "bat");
        assert!(result.success);
        assert_eq!(result.attempts.len(), 1);
    }

    #[test]
    fn solve_word_runs_out_of_guesses() {
        let dictionary = rhymes();
        let result = solve_word(SolveConfig::new("sat"), &dictionary).unwrap();

        assert!(!result.success);
        assert_eq!(result.attempts.len(), MAX_GUESSES);
    }

    #[test]
    fn solve_word_missing_target() {
        let dictionary = rhymes();
        let result = solve_word(SolveConfig::new("dog"), &dictionary).unwrap();

        assert!(!result.success);
        assert!(!result.in_dictionary);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = rhymes();

        assert_eq!(
            solve_word(SolveConfig::new("c4t"), &dictionary).unwrap_err(),
            SolveError::InvalidTarget("c4t".to_string())
        );
        assert!(solve_word(SolveConfig::new(""), &dictionary).is_err());
    }
}
