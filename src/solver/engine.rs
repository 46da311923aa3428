//! Lexicographic guessing agent

use crate::core::{Attempt, MAX_GUESSES, is_all_stars};
use crate::game::{Dictionary, Game};
use log::{debug, trace};

/// Play `game` to completion using words from `dictionary`
///
/// The agent walks the dictionary's words of the secret's length in sorted
/// order, once. Every word consistent with all attempts made so far is
/// guessed. The walk stops when a guess comes back all exact matches, when
/// the game has used its guess budget, or when the words run out.
///
/// Returns the guesses in the order they were made if the secret was found,
/// or `None` if it was not.
///
/// # Examples
/// ```
/// use wordle_analyser::game::WordleGame;
/// use wordle_analyser::solver::find_word;
/// use wordle_analyser::wordlists::WordList;
///
/// let dictionary: WordList = ["cat", "bat", "act"].into_iter().collect();
/// let mut game = WordleGame::new("cat");
///
/// let guesses = find_word(&dictionary, &mut game).unwrap();
/// // "act" scores "..*", which rules out "bat"
/// assert_eq!(guesses, vec!["act", "cat"]);
/// ```
pub fn find_word<D, G>(dictionary: &D, game: &mut G) -> Option<Vec<String>>
where
    D: Dictionary + ?Sized,
    G: Game + ?Sized,
{
    let mut words = dictionary.words_with_length(game.word_length());
    words.sort_unstable();

    let mut attempts: Vec<Attempt> = Vec::new();

    for candidate in words {
        if attempts.iter().all(|attempt| attempt.admits(&candidate)) {
            let result = game.guess_word(&candidate);
            debug!("Guess {}: {candidate} -> {result}", game.num_guesses());

            let solved = is_all_stars(&result);
            attempts.push(Attempt::new(candidate, result));

            if solved {
                debug!("Solved in {} guesses", attempts.len());
                return Some(attempts.into_iter().map(Attempt::into_guess).collect());
            }
        } else {
            trace!("Skipping inconsistent candidate {candidate}");
        }

        if game.num_guesses() >= MAX_GUESSES {
            debug!("Out of guesses after {} attempts", attempts.len());
            return None;
        }
    }

    debug!("No consistent candidates left after {} attempts", attempts.len());
    None
}
