//! Word scoring and ranking
//!
//! - `pair`: one guess against one answer
//! - `aggregate`: one guess against a whole answer corpus
//! - `rank`: ordering and top-tier extraction
//! - `second`: depleting answers by a first word and finding second words

pub mod aggregate;
pub mod pair;
pub mod rank;
pub mod second;

pub use aggregate::{aggregate_score, aggregate_score_masked, score_pool, score_pool_masked};
pub use pair::{
    EXACT_POINTS, MAX_PAIR_SCORE, OFFSET_POINTS, PairScore, pair_breakdown, score_pair,
    score_pair_masked,
};
pub use rank::{ScoredWord, rank, top_tier};
pub use second::{
    SecondWordTier, analyze_second_words, best_second_words, deplete, deplete_corpus,
};
