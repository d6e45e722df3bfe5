//! Command implementations

pub mod corpora;
pub mod first;
pub mod score;
pub mod second;

pub use corpora::{AnalysisConfig, Corpora, DEFAULT_ANSWERS_FILE, DEFAULT_GUESSES_FILE};
pub use first::{FirstWordsReport, best_first_words, rank_first_words};
pub use score::{WordScoreReport, score_word};
pub use second::{SecondWordsReport, best_first_and_second_words};
