//! Aggregate scores over an answer corpus
//!
//! A guess's aggregate score is the sum of its pair scores against every answer.
//! Scoring a whole candidate pool is independent per candidate, so it is spread
//! across the rayon pool; results come back in pool order.

use super::pair::{score_pair, score_pair_masked};
use super::rank::ScoredWord;
use crate::core::{MaskedWord, Word};
use rayon::prelude::*;

/// Sum of `guess`'s pair scores against every answer
///
/// # Examples
/// ```
/// use best_wordle_words::core::Word;
/// use best_wordle_words::scoring::aggregate_score;
///
/// let answers = vec![Word::new("happy").unwrap(), Word::new("hairy").unwrap()];
/// let guess = Word::new("happy").unwrap();
///
/// // 15 against itself, 9 against hairy
/// assert_eq!(aggregate_score(&guess, &answers), 24);
/// ```
#[must_use]
pub fn aggregate_score(guess: &Word, answers: &[Word]) -> u32 {
    answers.iter().map(|answer| score_pair(guess, answer)).sum()
}

/// Sum of `guess`'s pair scores against a depleted answer corpus
#[must_use]
pub fn aggregate_score_masked(guess: &Word, answers: &[MaskedWord]) -> u32 {
    answers
        .iter()
        .map(|answer| score_pair_masked(guess, answer))
        .sum()
}

/// Score every word in `pool` against `answers`
#[must_use]
pub fn score_pool(pool: &[Word], answers: &[Word]) -> Vec<ScoredWord> {
    pool.par_iter()
        .map(|guess| ScoredWord::new(guess.clone(), aggregate_score(guess, answers)))
        .collect()
}

/// Score every word in `pool` against a depleted answer corpus
#[must_use]
pub fn score_pool_masked(pool: &[Word], answers: &[MaskedWord]) -> Vec<ScoredWord> {
    pool.par_iter()
        .map(|guess| ScoredWord::new(guess.clone(), aggregate_score_masked(guess, answers)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn aggregate_is_sum_of_pairs() {
        let answers = words_from_slice(&["happy", "hairy", "ghost"]);
        let guess = Word::new("happy").unwrap();

        let expected: u32 = answers.iter().map(|a| score_pair(&guess, a)).sum();
        assert_eq!(aggregate_score(&guess, &answers), expected);
        assert_eq!(expected, 15 + 9 + 1);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let answers = words_from_slice(&["crane", "slate", "geese", "ababa"]);
        let guess = Word::new("aabbb").unwrap();

        let first = aggregate_score(&guess, &answers);
        let second = aggregate_score(&guess, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn aggregate_of_empty_corpus_is_zero() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(aggregate_score(&guess, &[]), 0);
    }

    #[test]
    fn masked_matches_unmasked_on_pristine_answers() {
        let answers = words_from_slice(&["happy", "hairy", "geese"]);
        let masked: Vec<MaskedWord> = answers.iter().map(MaskedWord::new).collect();
        let guess = Word::new("eerie").unwrap();

        assert_eq!(
            aggregate_score(&guess, &answers),
            aggregate_score_masked(&guess, &masked)
        );
    }

    #[test]
    fn score_pool_preserves_order() {
        let pool = words_from_slice(&["ghost", "happy", "hairy"]);
        let answers = words_from_slice(&["happy", "hairy"]);

        let scored = score_pool(&pool, &answers);

        let words: Vec<&str> = scored.iter().map(|s| s.word().text()).collect();
        assert_eq!(words, vec!["ghost", "happy", "hairy"]);
        assert_eq!(scored[1].score(), 24);
        assert_eq!(scored[2].score(), 24);
    }

    #[test]
    fn score_pool_matches_sequential_scoring() {
        let pool = words_from_slice(&["crane", "slate", "irate", "trace", "aabbb"]);
        let answers = words_from_slice(&["ababa", "geese", "happy", "least"]);

        let parallel = score_pool(&pool, &answers);
        for (scored, guess) in parallel.iter().zip(&pool) {
            assert_eq!(scored.score(), aggregate_score(guess, &answers));
        }
    }
}
