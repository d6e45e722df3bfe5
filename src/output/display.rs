//! Display functions for command results

use super::formatters::{create_progress_bar, format_tier_inline, plural};
use crate::commands::{FirstWordsReport, SecondWordsReport, WordScoreReport};
use crate::scoring::MAX_PAIR_SCORE;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_corpus_sizes(answers: usize, guesses: usize, pool: usize) {
    println!("\n📚 Answers:    {}", plural(answers, "word"));
    println!("   Guesses:    {}", plural(guesses, "word"));
    println!("   Candidates: {}", plural(pool, "word"));
}

/// Print the top tier of first words
pub fn print_first_words(report: &FirstWordsReport) {
    print_header("BEST FIRST WORDS");
    print_corpus_sizes(report.answers_count, report.guesses_count, report.pool_size);

    println!("\nWords and scores for top first words:");
    for scored in &report.best {
        println!(
            "{} {}",
            scored.word().text().bright_yellow().bold(),
            scored.score()
        );
    }

    println!(
        "\n{}",
        format!("Done in {:.2}s", report.duration.as_secs_f64()).bright_black()
    );
}

/// Print each top first word followed by its best second words
pub fn print_second_words(report: &SecondWordsReport) {
    print_header("BEST FIRST AND SECOND WORDS");
    print_corpus_sizes(report.answers_count, report.guesses_count, report.pool_size);

    println!("\nWords and scores for top first words and second words:");
    for tier in &report.tiers {
        println!(
            "{} {}",
            tier.first.word().text().bright_yellow().bold(),
            tier.first.score()
        );
        println!("{}", format_tier_inline(&tier.second).green());
    }

    println!(
        "\n{}",
        format!("Done in {:.2}s", report.duration.as_secs_f64()).bright_black()
    );
}

/// Print the result of scoring a single word
pub fn print_word_score(report: &WordScoreReport) {
    print_header(&format!("SCORE: {}", report.word.text().to_uppercase()));

    let bar = create_progress_bar(report.average, f64::from(MAX_PAIR_SCORE), 30);

    println!("\n📊 Against {}:", plural(report.answers_count, "answer"));
    println!(
        "   Total score:    {}",
        report.score.to_string().bright_yellow().bold()
    );
    println!(
        "   Per answer:     [{}] {:.3} / {MAX_PAIR_SCORE}",
        bar.green(),
        report.average
    );
    println!("   Exact matches:  {}", report.exact_matches);
    println!("   Offset matches: {}", report.offset_matches);

    let position = format!("#{} of {}", report.rank, report.pool_size);
    if report.in_pool {
        println!("   Rank:           {position}");
    } else {
        println!(
            "   Rank:           {} {}",
            position,
            "(not in candidate pool)".yellow()
        );
    }
}
