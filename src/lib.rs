//! Wordle AI Analyser
//!
//! A deterministic Wordle guessing agent and a harness that runs it over a
//! dictionary and summarises how it did.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_analyser::analysis::Analyser;
//! use wordle_analyser::wordlists::WordList;
//!
//! let dictionary = WordList::embedded();
//! let mut analyser = Analyser::new(&dictionary, 5);
//! analyser.run_experiments_with_words_between("crane", "crowd");
//!
//! let frequency = analyser.num_guesses_frequency();
//! assert_eq!(frequency.iter().sum::<usize>(), analyser.experiments().len());
//! print!("{}", analyser.make_histogram(1).unwrap());
//! ```

// Core domain types
pub mod core;

// Game collaborators
pub mod game;

// Guessing agent
pub mod solver;

// Experiments and statistics
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
