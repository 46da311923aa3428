//! Wordle AI Analyser - CLI
//!
//! Runs the lexicographic guessing agent on one word or a whole dictionary
//! and prints the statistics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_analyser::{
    commands::{AnalyseConfig, DEFAULT_BUCKET_SIZE, SolveConfig, run_analysis, solve_word},
    logging::init_logger,
    output::{print_analysis_report, print_solve_result},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_analyser",
    about = "Deterministic Wordle agent with an experiment and statistics harness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'default' (embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret word
    Solve {
        /// The secret word
        word: String,
    },

    /// Run experiments over the dictionary and print statistics
    Analyse {
        /// Length of the secret words
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// First word of the range (inclusive)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Last word of the range (inclusive)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Experiments per histogram row
        #[arg(short, long, default_value_t = DEFAULT_BUCKET_SIZE)]
        bucket_size: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "default" => Ok(WordList::embedded()),
        path => WordList::from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dictionary = load_wordlist(&cli.wordlist)?;
    log::info!("Dictionary has {} words", dictionary.len());

    match cli.command {
        Commands::Solve { word } => run_solve_command(&word, &dictionary),
        Commands::Analyse {
            length,
            from,
            to,
            bucket_size,
            quiet,
        } => {
            let config = AnalyseConfig {
                word_length: length,
                range: from.zip(to),
                bucket_size,
                show_progress: !quiet,
            };
            run_analyse_command(&config, &dictionary)
        }
    }
}

fn run_solve_command(word: &str, dictionary: &WordList) -> Result<()> {
    let result = solve_word(SolveConfig::new(word), dictionary)?;
    print_solve_result(&result);
    Ok(())
}

fn run_analyse_command(config: &AnalyseConfig, dictionary: &WordList) -> Result<()> {
    if config.word_length == 0 {
        bail!("word length must be at least 1");
    }

    println!("\n{}", "═".repeat(60));
    println!(" Wordle AI Analysis ");
    println!("{}", "═".repeat(60));
    match &config.range {
        Some((start, finish)) => println!(
            "\nTesting {}-letter words from {start} to {finish}",
            config.word_length
        ),
        None => println!("\nTesting every {}-letter word", config.word_length),
    }
    println!();

    let report = run_analysis(config, dictionary).context("running analysis")?;
    print_analysis_report(&report);
    Ok(())
}
