//! Single word scoring command
//!
//! Reports how one word fares against the answers: its aggregate score, the
//! average per answer, the exact/offset split, and where it would rank.

use super::corpora::Corpora;
use super::first::rank_first_words;
use crate::core::{MaskedWord, Word};
use crate::error::AnalysisError;
use crate::scoring::{PairScore, ScoredWord, pair_breakdown};
use std::cmp::Ordering;

/// Result of scoring one word
pub struct WordScoreReport {
    pub word: Word,
    pub score: u32,
    pub exact_matches: u32,
    pub offset_matches: u32,
    pub average: f64,
    pub answers_count: usize,
    /// 1-based position in the first-word ranking
    pub rank: usize,
    pub pool_size: usize,
    pub in_pool: bool,
}

/// Score `word` against the answers and place it in the first-word ranking
///
/// The word does not need to be in either corpus; if it is not, `rank` is where
/// it would land.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidWord` if `word` is not a valid word.
pub fn score_word(word: &str, corpora: &Corpora) -> Result<WordScoreReport, AnalysisError> {
    let word = Word::new(word)?;

    let totals = corpora
        .answers()
        .iter()
        .map(|answer| pair_breakdown(&word, &MaskedWord::new(answer)))
        .fold(PairScore::default(), |acc, pair| PairScore {
            exact: acc.exact + pair.exact,
            offset: acc.offset + pair.offset,
        });
    let score = totals.points();

    let target = ScoredWord::new(word.clone(), score);
    let ranked = rank_first_words(corpora);
    let ahead = ranked
        .iter()
        .take_while(|other| other.rank_cmp(&target) == Ordering::Less)
        .count();

    Ok(WordScoreReport {
        in_pool: corpora.pool().contains(&word),
        word,
        score,
        exact_matches: totals.exact,
        offset_matches: totals.offset,
        average: f64::from(score) / corpora.answers().len() as f64,
        answers_count: corpora.answers().len(),
        rank: ahead + 1,
        pool_size: corpora.pool().len(),
    })
}
