//! Best first and second words command
//!
//! Finds the top tier of first words, then for each of them the top tier of
//! second words against the answers that first word leaves behind.

use super::corpora::Corpora;
use super::first::rank_first_words;
use crate::scoring::{SecondWordTier, best_second_words, top_tier};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};

/// Result of the best-first-and-second-words analysis
pub struct SecondWordsReport {
    pub answers_count: usize,
    pub guesses_count: usize,
    pub pool_size: usize,
    pub tiers: Vec<SecondWordTier>,
    pub duration: Duration,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Find the top first words and the best second words for each
///
/// Each first word is analysed independently against the unmodified answers.
#[must_use]
pub fn best_first_and_second_words(corpora: &Corpora, show_progress: bool) -> SecondWordsReport {
    let start = Instant::now();
    let ranked = rank_first_words(corpora);
    let first_tier = top_tier(&ranked);
    info!("{} top first words", first_tier.len());

    let pb = progress_bar(first_tier.len(), show_progress);
    let tiers = first_tier
        .iter()
        .map(|first| {
            pb.set_message(first.word().to_string());
            let tier = best_second_words(first, corpora.pool(), corpora.answers());
            pb.inc(1);
            tier
        })
        .collect();
    pb.finish_and_clear();

    SecondWordsReport {
        answers_count: corpora.answers().len(),
        guesses_count: corpora.guesses_count(),
        pool_size: corpora.pool().len(),
        tiers,
        duration: start.elapsed(),
    }
}
