//! Display functions for command results

use super::formatters::{bucket_label, create_progress_bar, ranked_letters, result_to_emoji};
use crate::analysis::{Analyser, HistogramError};
use crate::commands::{AnalysisReport, SolveResult};
use crate::core::MAX_GUESSES;
use crate::game::Dictionary;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_dictionary {
        println!(
            "{}",
            "⚠ Target is not in the dictionary, so it can never be guessed".yellow()
        );
    }

    for (i, attempt) in result.attempts.iter().enumerate() {
        println!(
            "Turn {}: {} {}",
            i + 1,
            attempt.guess().to_uppercase(),
            result_to_emoji(attempt.result())
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.attempts.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.attempts.len())
                .red()
                .bold()
        );
    }
}

/// Print the statistics of an analysis run
pub fn print_analysis_report(report: &AnalysisReport) {
    let summary = &report.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANALYSIS RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Word length:         {}", report.word_length);
    println!("  Total words tested:  {}", summary.total);
    println!(
        "  Successfully solved: {} {}",
        summary.solved,
        format!("({:.1}%)", summary.solve_rate() * 100.0).green()
    );
    if summary.unsolved > 0 {
        println!(
            "  Failed to solve:     {} {}",
            summary.unsolved,
            format!("({:.1}%)", (1.0 - summary.solve_rate()) * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", summary.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        report.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = report.num_guesses_frequency.iter().copied().max().unwrap_or(0);
    for (i, &count) in report.num_guesses_frequency.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let bar = if i == MAX_GUESSES { bar.red() } else { bar.green() };
        println!("  {}: {bar} {count:5}", bucket_label(i, MAX_GUESSES));
    }

    println!("\n🔤 {}", "Guessed Letters".bright_cyan().bold());
    let ranked = ranked_letters(&report.letter_frequency);
    if ranked.is_empty() {
        println!("  (none)");
    } else {
        let line: Vec<String> = ranked
            .iter()
            .map(|(letter, count)| format!("{letter}:{count}"))
            .collect();
        println!("  {}", line.join(" "));
    }

    if !report.unsolved_words.is_empty() {
        println!(
            "\n😰 {}",
            format!("Unsolved Words ({})", report.unsolved_words.len())
                .yellow()
                .bold()
        );
        for chunk in report.unsolved_words.chunks(10) {
            println!("  {}", chunk.join(" ").yellow());
        }
    }

    println!(
        "\n🧱 {}",
        format!("Histogram (bucket size {})", report.bucket_size)
            .bright_cyan()
            .bold()
    );
    if report.histogram.is_empty() {
        println!("  (every bar is below one bucket)");
    } else {
        print!("{}", report.histogram);
    }
}

/// Print the histogram of the guesses-to-solve distribution
///
/// # Errors
///
/// Returns `HistogramError::ZeroBucketSize` if `bucket_size` is 0.
pub fn print_histogram<D: Dictionary + ?Sized>(
    analyser: &Analyser<'_, D>,
    bucket_size: usize,
) -> Result<(), HistogramError> {
    println!("{}", analyser.make_histogram(bucket_size)?);
    Ok(())
}
