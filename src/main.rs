//! Best Wordle Words - CLI
//!
//! Finds the Wordle first words that best overlap the answer list, and the best
//! second words to follow each of them.

use anyhow::{Context, Result};
use best_wordle_words::{
    commands::{
        AnalysisConfig, Corpora, DEFAULT_ANSWERS_FILE, DEFAULT_GUESSES_FILE,
        best_first_and_second_words, best_first_words, score_word,
    },
    output::{print_first_words, print_second_words, print_word_score},
    wordlists::MalformedPolicy,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "best_wordle_words",
    about = "Ranks Wordle first and second guesses by letter overlap with the answer list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers word list
    #[arg(short, long, global = true, default_value = DEFAULT_ANSWERS_FILE)]
    answers: PathBuf,

    /// Guesses word list
    #[arg(short, long, global = true, default_value = DEFAULT_GUESSES_FILE)]
    guesses: PathBuf,

    /// What to do with tokens that are not 5-letter words
    #[arg(long, global = true, value_enum, default_value_t = MalformedPolicy::Skip)]
    malformed: MalformedPolicy,

    /// Worker threads for scoring (default: one per core)
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display best first words only (default)
    First,

    /// Display best first and best second words
    Second,

    /// Score a single word against the answers
    Score {
        /// Word to score
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("failed to configure scoring threads")?;
    }

    let config = AnalysisConfig {
        answers_path: cli.answers,
        guesses_path: cli.guesses,
        malformed: cli.malformed,
        show_progress: !cli.no_progress,
    };

    let corpora = Corpora::load(&config).context("failed to load word lists")?;

    match cli.command.unwrap_or(Commands::First) {
        Commands::First => {
            let report = best_first_words(&corpora);
            print_first_words(&report);
        }
        Commands::Second => {
            let report = best_first_and_second_words(&corpora, config.show_progress);
            print_second_words(&report);
        }
        Commands::Score { word } => {
            let report = score_word(&word, &corpora)?;
            print_word_score(&report);
        }
    }

    Ok(())
}
