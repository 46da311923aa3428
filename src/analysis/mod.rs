//! Experiment runner and statistics
//!
//! An [`Analyser`] runs the guessing agent against secret words drawn from a
//! dictionary, keeps every outcome, and summarises them.

mod experiment;
mod histogram;

pub use experiment::Experiment;
pub use histogram::{BAR, HistogramError, SPACE, make_histogram};

use crate::core::MAX_GUESSES;
use crate::game::{Dictionary, WordleGame};
use crate::solver::find_word;
use log::{debug, info};
use rustc_hash::FxHashSet;

/// Number of letters tracked by [`Analyser::guess_letter_frequency`]
pub const ALPHABET_SIZE: usize = 26;

/// Buckets in [`Analyser::num_guesses_frequency`]: one per guess count, plus
/// one for unsolved words
pub const NUM_BUCKETS: usize = MAX_GUESSES + 1;

/// Runs experiments over a dictionary and computes statistics
///
/// Experiments are only ever appended; running the same word twice records
/// two experiments.
///
/// # Examples
///
/// ```rust
/// use wordle_analyser::analysis::Analyser;
/// use wordle_analyser::wordlists::WordList;
///
/// let dictionary: WordList = ["act", "bat", "bet", "cat"].into_iter().collect();
/// let mut analyser = Analyser::new(&dictionary, 3);
///
/// analyser.run_experiments_with_words_between("baa", "caa");
///
/// let words: Vec<&str> = analyser.experiments().iter().map(|e| e.word()).collect();
/// assert_eq!(words, vec!["bat", "bet"]);
/// ```
#[derive(Debug)]
pub struct Analyser<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    word_length: usize,
    experiments: Vec<Experiment>,
}

impl<'a, D: Dictionary + ?Sized> Analyser<'a, D> {
    /// Create an analyser for words of `word_length` letters
    #[must_use]
    pub const fn new(dictionary: &'a D, word_length: usize) -> Self {
        Self {
            dictionary,
            word_length,
            experiments: Vec::new(),
        }
    }

    /// Length of the secret words this analyser runs
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Every experiment run so far, in the order they were run
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Play a fresh game with `word` as the secret and record the outcome
    ///
    /// `word` is not validated; it is expected to come from the dictionary
    /// and have the configured length.
    pub fn run_experiment(&mut self, word: &str) -> &Experiment {
        let mut game = WordleGame::new(word);
        let guesses = find_word(self.dictionary, &mut game);

        match &guesses {
            Some(g) => debug!("{word}: solved in {} ({})", g.len(), g.join(", ")),
            None => debug!("{word}: unsolved"),
        }

        self.experiments
            .push(Experiment::new(word.to_string(), guesses));
        &self.experiments[self.experiments.len() - 1]
    }

    /// Words of the configured length, in the dictionary's own order
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        self.dictionary.words_with_length(self.word_length)
    }

    /// Sorted words of the configured length with `start <= word <= finish`
    #[must_use]
    pub fn words_between(&self, start: &str, finish: &str) -> Vec<String> {
        let mut words = self.all_words();
        words.sort_unstable();
        words.retain(|w| w.as_str() >= start && w.as_str() <= finish);
        words
    }

    /// Run one experiment for every word of the configured length
    pub fn run_experiments_with_all_words(&mut self) {
        let words = self.all_words();
        self.run_experiments_with(&words, |_| {});
    }

    /// Run one experiment for every word between `start` and `finish`,
    /// inclusive, in sorted order
    pub fn run_experiments_with_words_between(&mut self, start: &str, finish: &str) {
        let words = self.words_between(start, finish);
        self.run_experiments_with(&words, |_| {});
    }

    /// Run one experiment per word, in the order given, calling `on_each`
    /// with every outcome as it is recorded
    pub fn run_experiments_with<F>(&mut self, words: &[String], mut on_each: F)
    where
        F: FnMut(&Experiment),
    {
        info!("Running {} experiments", words.len());
        for word in words {
            on_each(self.run_experiment(word));
        }
        info!(
            "Finished {} experiments ({} recorded in total)",
            words.len(),
            self.experiments.len()
        );
    }

    /// Distinct words that were not solved, sorted
    #[must_use]
    pub fn unsolved_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .experiments
            .iter()
            .filter(|e| !e.is_solved())
            .map(|e| e.word().to_string())
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }

    fn unsolved_set(&self) -> FxHashSet<&str> {
        self.experiments
            .iter()
            .filter(|e| !e.is_solved())
            .map(Experiment::word)
            .collect()
    }

    /// How often each letter `a`..=`z` appeared in guesses for solved words
    ///
    /// A word counts as unsolved here if any experiment on it went unsolved.
    ///
    /// # Panics
    /// Panics if a guess contains anything other than lowercase ASCII letters.
    #[must_use]
    pub fn guess_letter_frequency(&self) -> [usize; ALPHABET_SIZE] {
        let unsolved = self.unsolved_set();
        let mut frequency = [0; ALPHABET_SIZE];

        let guesses = self
            .experiments
            .iter()
            .filter(|e| !unsolved.contains(e.word()))
            .filter_map(Experiment::guesses)
            .flatten();

        for guess in guesses {
            for letter in guess.bytes() {
                frequency[usize::from(letter - b'a')] += 1;
            }
        }

        frequency
    }

    /// Distribution of guesses needed
    ///
    /// Index `k` in `0..6` counts experiments solved in `k + 1` guesses; the
    /// last index counts unsolved experiments.
    #[must_use]
    pub fn num_guesses_frequency(&self) -> [usize; NUM_BUCKETS] {
        let unsolved = self.unsolved_set();
        let mut frequency = [0; NUM_BUCKETS];

        for experiment in &self.experiments {
            let bucket = match experiment.num_guesses() {
                Some(n @ 1..=MAX_GUESSES) if !unsolved.contains(experiment.word()) => n - 1,
                _ => MAX_GUESSES,
            };
            frequency[bucket] += 1;
        }

        frequency
    }

    /// Bar chart of [`num_guesses_frequency`](Self::num_guesses_frequency)
    ///
    /// # Errors
    ///
    /// Returns `HistogramError::ZeroBucketSize` if `bucket_size` is 0.
    pub fn make_histogram(&self, bucket_size: usize) -> Result<String, HistogramError> {
        make_histogram(&self.num_guesses_frequency(), bucket_size)
    }

    /// Totals over every experiment run so far
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_frequency(&self.num_guesses_frequency())
    }
}

/// Totals derived from the guesses-to-solve distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub solved: usize,
    pub unsolved: usize,
    /// Mean guesses over solved experiments, 0 if none were solved
    pub average_guesses: f64,
}

impl Summary {
    #[must_use]
    pub fn from_frequency(frequency: &[usize; NUM_BUCKETS]) -> Self {
        let unsolved = frequency[MAX_GUESSES];
        let solved: usize = frequency[..MAX_GUESSES].iter().sum();
        let total_guesses: usize = frequency[..MAX_GUESSES]
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1) * count)
            .sum();

        let average_guesses = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        Self {
            total: solved + unsolved,
            solved,
            unsolved,
            average_guesses,
        }
    }

    /// Fraction of experiments solved, 0 if none were run
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solved as f64 / self.total as f64
        }
    }
}
