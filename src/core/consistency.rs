//! Consistency checks between a candidate word and earlier feedback
//!
//! These are pure predicates over ASCII lowercase words. Each position of a
//! result is judged on its own: duplicate-letter bookkeeping belongs to
//! whoever produced the result, not to these checks.

use super::Feedback;

/// Check if `word` contains `letter` at any position
#[inline]
#[must_use]
pub fn guess_contains(word: &str, letter: u8) -> bool {
    word.as_bytes().contains(&letter)
}

/// Check if `candidate` could be the secret, given that guessing
/// `previous_guess` produced `result`
///
/// Per position `i`:
/// - `*`: `candidate[i]` must equal `previous_guess[i]`
/// - `.`: `candidate[i]` must differ from `previous_guess[i]`, and the
///   letter must appear somewhere in `candidate`
/// - `_`: the letter must not appear anywhere in `candidate`
///
/// # Panics
/// Panics if `previous_guess` or `candidate` is shorter than `result`.
///
/// # Examples
/// ```
/// use wordle_analyser::core::is_consistent;
///
/// assert!(is_consistent("dxaxx", "*_.__", "dairy"));
/// assert!(is_consistent("dxaxx", "*_.__", "dzzza"));
/// assert!(!is_consistent("dxaxx", "*_.__", "testa"));
/// assert!(!is_consistent("dxaxx", "*_.__", "dxiry"));
/// ```
#[must_use]
pub fn is_consistent(previous_guess: &str, result: &str, candidate: &str) -> bool {
    let previous = previous_guess.as_bytes();
    let new = candidate.as_bytes();

    result.chars().enumerate().all(|(i, symbol)| {
        let letter = previous[i];
        match Feedback::from_symbol(symbol) {
            Feedback::Exact => new[i] == letter,
            Feedback::Misplaced => new[i] != letter && guess_contains(candidate, letter),
            Feedback::Absent => !guess_contains(candidate, letter),
        }
    })
}

/// Check if every symbol in `result` is an exact match
///
/// An empty result passes trivially.
#[must_use]
pub fn is_all_stars(result: &str) -> bool {
    result
        .chars()
        .all(|symbol| Feedback::from_symbol(symbol) == Feedback::Exact)
}
