//! Core domain types for Wordle
//!
//! Feedback symbols, recorded attempts and the consistency rules the guessing
//! agent relies on. Everything here is pure and has no external dependencies.

mod attempt;
mod consistency;
mod feedback;

pub use attempt::Attempt;
pub use consistency::{guess_contains, is_all_stars, is_consistent};
pub use feedback::{Feedback, render};

/// Maximum number of guesses a game allows
pub const MAX_GUESSES: usize = 6;
