//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format a result string as emoji squares
#[must_use]
pub fn result_to_emoji(result: &str) -> String {
    result
        .chars()
        .map(|symbol| match Feedback::from_symbol(symbol) {
            Feedback::Exact => '🟩',
            Feedback::Misplaced => '🟨',
            Feedback::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Label for a guesses-to-solve bucket: `1`..`6`, then `X` for unsolved
#[must_use]
pub fn bucket_label(index: usize, unsolved_index: usize) -> String {
    if index == unsolved_index {
        "X".to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Pair each letter `a`..=`z` with its count, most frequent first
///
/// Ties keep alphabetical order; letters never guessed are dropped.
#[must_use]
pub fn ranked_letters(frequency: &[usize]) -> Vec<(char, usize)> {
    let mut ranked: Vec<(char, usize)> = (b'a'..=b'z')
        .map(char::from)
        .zip(frequency.iter().copied())
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
    ranked
}
