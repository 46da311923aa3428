//! Analysis command
//!
//! Runs the agent over many secret words and gathers the statistics.

use crate::analysis::{ALPHABET_SIZE, Analyser, HistogramError, NUM_BUCKETS, Summary};
use crate::game::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Bucket size used when none is given
pub const DEFAULT_BUCKET_SIZE: usize = 50;

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalyseConfig {
    pub word_length: usize,
    /// Inclusive `(start, finish)` bounds; `None` runs every word
    pub range: Option<(String, String)>,
    pub bucket_size: usize,
    pub show_progress: bool,
}

impl AnalyseConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            range: None,
            bucket_size: DEFAULT_BUCKET_SIZE,
            show_progress: false,
        }
    }
}

/// Everything an analysis run produced
#[derive(Debug)]
pub struct AnalysisReport {
    pub word_length: usize,
    pub summary: Summary,
    pub unsolved_words: Vec<String>,
    pub letter_frequency: [usize; ALPHABET_SIZE],
    pub num_guesses_frequency: [usize; NUM_BUCKETS],
    pub bucket_size: usize,
    pub histogram: String,
    pub total_time: Duration,
}

/// Run experiments as configured and collect the statistics
///
/// # Errors
///
/// Returns `HistogramError::ZeroBucketSize` if the bucket size is 0. The
/// bucket size is checked before any experiment runs.
pub fn run_analysis<D: Dictionary + ?Sized>(
    config: &AnalyseConfig,
    dictionary: &D,
) -> Result<AnalysisReport, HistogramError> {
    if config.bucket_size == 0 {
        return Err(HistogramError::ZeroBucketSize);
    }

    let mut analyser = Analyser::new(dictionary, config.word_length);
    let words = match &config.range {
        Some((start, finish)) => analyser.words_between(start, finish),
        None => analyser.all_words(),
    };

    let pb = if config.show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    analyser.run_experiments_with(&words, |experiment| {
        pb.set_message(experiment.word().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    Ok(AnalysisReport {
        word_length: analyser.word_length(),
        summary: analyser.summary(),
        unsolved_words: analyser.unsolved_words(),
        letter_frequency: analyser.guess_letter_frequency(),
        num_guesses_frequency: analyser.num_guesses_frequency(),
        bucket_size: config.bucket_size,
        histogram: analyser.make_histogram(config.bucket_size)?,
        total_time,
    })
}
