//! Scoring a single guess against a single answer

use crate::core::{MaskedWord, MatchKind, WORD_LENGTH, Word, match_and_mark};

/// Points for a letter in the right position
pub const EXACT_POINTS: u32 = 3;

/// Points for a letter present elsewhere in the answer
pub const OFFSET_POINTS: u32 = 1;

/// Highest score a single guess/answer pair can reach
pub const MAX_PAIR_SCORE: u32 = EXACT_POINTS * WORD_LENGTH as u32;

/// Breakdown of one guess/answer comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairScore {
    pub exact: u32,
    pub offset: u32,
}

impl PairScore {
    /// Total points for this pair
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        self.exact * EXACT_POINTS + self.offset * OFFSET_POINTS
    }
}

/// Match a guess against a (possibly depleted) answer and count the matches
///
/// Works on private copies; neither argument is changed.
#[must_use]
pub fn pair_breakdown(guess: &Word, answer: &MaskedWord) -> PairScore {
    let mut guess = MaskedWord::new(guess);
    let mut answer = answer.clone();
    let mut score = PairScore::default();

    match_and_mark(&mut guess, &mut answer, |kind, _| match kind {
        MatchKind::Exact => score.exact += 1,
        MatchKind::Offset => score.offset += 1,
    });

    score
}

/// Score `guess` against `answer`
///
/// # Examples
/// ```
/// use best_wordle_words::core::Word;
/// use best_wordle_words::scoring::score_pair;
///
/// let guess = Word::new("aabbb").unwrap();
/// let answer = Word::new("ababa").unwrap();
///
/// // two exact matches (a, b) and two offset matches (a, b)
/// assert_eq!(score_pair(&guess, &answer), 8);
/// ```
#[inline]
#[must_use]
pub fn score_pair(guess: &Word, answer: &Word) -> u32 {
    pair_breakdown(guess, &MaskedWord::new(answer)).points()
}

/// Score `guess` against an answer whose claimed positions are already used up
#[inline]
#[must_use]
pub fn score_pair_masked(guess: &Word, answer: &MaskedWord) -> u32 {
    pair_breakdown(guess, answer).points()
}
