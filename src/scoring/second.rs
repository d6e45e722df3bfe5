//! Best second words for a chosen first word
//!
//! Once a first word has been played, the answer letters it accounts for are no
//! longer useful for a second guess. Each answer is depleted by matching the first
//! word against it, and the candidate pool is scored again against what is left.
//!
//! Every first word is analysed against the pristine answer corpus. Depletion
//! never writes back to the input, so analyses of different first words cannot
//! see each other's state.

use super::aggregate::score_pool_masked;
use super::rank::{ScoredWord, rank, top_tier};
use crate::core::{MaskedWord, Word, match_and_mark};
use log::debug;

/// Best second words found for one first word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondWordTier {
    /// The first word with its score against the pristine answers
    pub first: ScoredWord,
    /// Top tier of second words against the depleted answers
    pub second: Vec<ScoredWord>,
}

/// Remove from `answer` the letters that `first` accounts for
///
/// # Examples
/// ```
/// use best_wordle_words::core::Word;
/// use best_wordle_words::scoring::deplete;
///
/// let first = Word::new("hairy").unwrap();
/// let answer = Word::new("happy").unwrap();
///
/// assert_eq!(deplete(&first, &answer).to_string(), "__pp_");
/// ```
#[must_use]
pub fn deplete(first: &Word, answer: &Word) -> MaskedWord {
    let mut first = MaskedWord::new(first);
    let mut answer = MaskedWord::new(answer);
    match_and_mark(&mut first, &mut answer, |_, _| {});
    answer
}

/// Deplete every answer, keeping corpus order
#[must_use]
pub fn deplete_corpus(first: &Word, answers: &[Word]) -> Vec<MaskedWord> {
    answers.iter().map(|answer| deplete(first, answer)).collect()
}

/// Score `pool` against `answers` depleted by `first` and keep the top tier
#[must_use]
pub fn best_second_words(first: &ScoredWord, pool: &[Word], answers: &[Word]) -> SecondWordTier {
    let depleted = deplete_corpus(first.word(), answers);
    let remaining: usize = depleted.iter().map(MaskedWord::remaining).sum();
    debug!("{}: {remaining} answer letters left after depletion", first.word());

    let ranked = rank(score_pool_masked(pool, &depleted));
    SecondWordTier {
        first: first.clone(),
        second: top_tier(&ranked).to_vec(),
    }
}

/// Best second words for each first word, in the order given
pub fn analyze_second_words<'a, I>(
    first_words: I,
    pool: &[Word],
    answers: &[Word],
) -> Vec<SecondWordTier>
where
    I: IntoIterator<Item = &'a ScoredWord>,
{
    first_words
        .into_iter()
        .map(|first| best_second_words(first, pool, answers))
        .collect()
}
