//! Ranking scored words and extracting the top tier

use crate::core::Word;
use rayon::slice::ParallelSliceMut;
use std::cmp::Ordering;
use std::fmt;

/// A word paired with its aggregate score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    word: Word,
    score: u32,
}

impl ScoredWord {
    #[must_use]
    pub const fn new(word: Word, score: u32) -> Self {
        Self { word, score }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Ranking order: higher score first, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.score)
    }
}

/// Sort by descending score, breaking ties alphabetically
///
/// The result does not depend on input order.
#[must_use]
pub fn rank(mut words: Vec<ScoredWord>) -> Vec<ScoredWord> {
    words.par_sort_by(ScoredWord::rank_cmp);
    words
}

/// Leading run of a ranking that shares the first entry's score
///
/// Empty only when `ranked` is empty.
///
/// # Examples
/// ```
/// use best_wordle_words::core::Word;
/// use best_wordle_words::scoring::{ScoredWord, rank, top_tier};
///
/// let ranked = rank(vec![
///     ScoredWord::new(Word::new("happy").unwrap(), 24),
///     ScoredWord::new(Word::new("ghost").unwrap(), 3),
///     ScoredWord::new(Word::new("hairy").unwrap(), 24),
/// ]);
///
/// let tier: Vec<&str> = top_tier(&ranked).iter().map(|s| s.word().text()).collect();
/// assert_eq!(tier, ["hairy", "happy"]);
/// ```
#[must_use]
pub fn top_tier(ranked: &[ScoredWord]) -> &[ScoredWord] {
    let Some(best) = ranked.first().map(ScoredWord::score) else {
        return &[];
    };
    let len = ranked.iter().take_while(|s| s.score == best).count();
    &ranked[..len]
}
