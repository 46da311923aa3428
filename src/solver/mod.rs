//! Wordle guessing agent
//!
//! A fixed, deterministic rule: always guess the lexicographically smallest
//! word that agrees with everything seen so far.

mod engine;

pub use engine::find_word;
