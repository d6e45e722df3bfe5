//! Best first words command
//!
//! Scores every candidate against the full answer corpus and keeps the top tier.

use super::corpora::Corpora;
use crate::scoring::{ScoredWord, rank, score_pool, top_tier};
use log::info;
use std::time::{Duration, Instant};

/// Result of the best-first-words analysis
pub struct FirstWordsReport {
    pub answers_count: usize,
    pub guesses_count: usize,
    pub pool_size: usize,
    pub best: Vec<ScoredWord>,
    pub duration: Duration,
}

/// Full first-word ranking of the candidate pool
#[must_use]
pub fn rank_first_words(corpora: &Corpora) -> Vec<ScoredWord> {
    info!(
        "scoring {} candidates against {} answers",
        corpora.pool().len(),
        corpora.answers().len()
    );
    rank(score_pool(corpora.pool(), corpora.answers()))
}

/// Find the top-scoring first words
#[must_use]
pub fn best_first_words(corpora: &Corpora) -> FirstWordsReport {
    let start = Instant::now();
    let ranked = rank_first_words(corpora);
    let best = top_tier(&ranked).to_vec();

    FirstWordsReport {
        answers_count: corpora.answers().len(),
        guesses_count: corpora.guesses_count(),
        pool_size: corpora.pool().len(),
        best,
        duration: start.elapsed(),
    }
}
