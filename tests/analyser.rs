//! End-to-end tests of the agent and analyser through the public API

use wordle_analyser::analysis::{Analyser, NUM_BUCKETS};
use wordle_analyser::core::{MAX_GUESSES, is_consistent};
use wordle_analyser::game::{Dictionary, Game, Recorder, WordleGame};
use wordle_analyser::solver::find_word;
use wordle_analyser::wordlists::WordList;

/// Dictionary whose words come back in a fixed, unsorted order
struct Scrambled(Vec<&'static str>);

impl Dictionary for Scrambled {
    fn words_with_length(&self, length: usize) -> Vec<String> {
        self.0
            .iter()
            .filter(|w| w.len() == length)
            .map(|w| (*w).to_string())
            .collect()
    }
}

#[test]
fn words_between_runs_only_inner_words() {
    let dictionary = Scrambled(vec!["act", "bat", "bet", "cat"]);
    let mut analyser = Analyser::new(&dictionary, 3);

    analyser.run_experiments_with_words_between("baa", "caa");

    let words: Vec<&str> = analyser.experiments().iter().map(|e| e.word()).collect();
    assert_eq!(words, vec!["bat", "bet"]);
}

#[test]
fn embedded_dictionary_statistics_hold_together() {
    let dictionary = WordList::embedded();
    let mut analyser = Analyser::new(&dictionary, 5);
    analyser.run_experiments_with_all_words();

    let experiments = analyser.experiments();
    assert_eq!(experiments.len(), dictionary.words_with_length(5).len());

    // Every experiment lands in exactly one bucket
    let frequency = analyser.num_guesses_frequency();
    assert_eq!(frequency.len(), NUM_BUCKETS);
    assert_eq!(frequency.iter().sum::<usize>(), experiments.len());

    // Unsolved list is sorted, distinct, and matches the last bucket
    let unsolved = analyser.unsolved_words();
    assert!(unsolved.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(unsolved.len(), frequency[MAX_GUESSES]);

    // Letters counted equal letters guessed in solved experiments
    let letters: usize = experiments
        .iter()
        .filter_map(|e| e.guesses())
        .flatten()
        .map(String::len)
        .sum();
    assert_eq!(analyser.guess_letter_frequency().iter().sum::<usize>(), letters);

    let summary = analyser.summary();
    assert_eq!(summary.total, experiments.len());
    assert_eq!(summary.unsolved, unsolved.len());
}

#[test]
fn agent_never_exceeds_budget_and_stays_consistent() {
    let dictionary = WordList::embedded();

    for secret in dictionary.words_with_length(5) {
        let mut game = Recorder::new(WordleGame::new(secret.as_str()));
        let solved = find_word(&dictionary, &mut game).is_some();

        assert!(game.num_guesses() <= MAX_GUESSES);
        let attempts = game.attempts();
        assert!(attempts.len() <= MAX_GUESSES, "{secret}: too many guesses");
        assert_eq!(solved, attempts.last().is_some_and(|a| a.guess() == secret));

        for (i, later) in attempts.iter().enumerate() {
            for earlier in &attempts[..i] {
                assert!(is_consistent(earlier.guess(), earlier.result(), later.guess()));
            }
        }
    }
}

#[test]
fn histogram_matches_distribution() {
    let dictionary = WordList::embedded();
    let mut analyser = Analyser::new(&dictionary, 3);
    analyser.run_experiments_with_all_words();

    let frequency = analyser.num_guesses_frequency();
    let tallest = frequency.iter().copied().max().unwrap_or(0);
    let chart = analyser.make_histogram(1).unwrap();

    assert_eq!(chart.lines().count(), tallest);
    assert!(chart.lines().all(|row| row.len() == NUM_BUCKETS));
    if tallest > 0 {
        assert!(chart.ends_with('\n'));
    }
}

#[test]
fn analysis_of_loaded_file_skips_words_outside_a_to_z() {
    use wordle_analyser::commands::{AnalyseConfig, run_analysis};

    let path = std::env::temp_dir().join("wordle_analyser_punctuated_words.txt");
    std::fs::write(&path, "don't\ncrane\nslate\ncafé\n").unwrap();
    let dictionary = WordList::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dictionary.len(), 2);

    let mut config = AnalyseConfig::new(5);
    config.bucket_size = 1;
    let report = run_analysis(&config, &dictionary).unwrap();

    assert_eq!(report.word_length, 5);
    assert_eq!(report.summary.total, 2);
    assert!(report.unsolved_words.is_empty());
    // crane solved first try; slate after crane
    assert_eq!(report.num_guesses_frequency, [1, 1, 0, 0, 0, 0, 0]);
    assert_eq!(report.letter_frequency.iter().sum::<usize>(), 15);
}
