//! Exact-then-offset letter matching
//!
//! Both pair scoring and first-word depletion walk a guess against an answer the
//! same way:
//! 1. Exact pass: every position where both letters agree is claimed on both sides
//! 2. Offset pass: every unclaimed guess letter claims the first unclaimed answer
//!    position holding the same letter
//!
//! A claimed position never matches again, so each answer letter is credited at
//! most once no matter how often it repeats in the guess.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// How a guess letter matched an answer letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Same letter at the same position
    Exact,
    /// Same letter at a different, still unclaimed position
    Offset,
}

/// Working copy of a word with a per-position claimed mask
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskedWord {
    chars: [u8; WORD_LENGTH],
    claimed: [bool; WORD_LENGTH],
}

impl MaskedWord {
    /// Create a working copy with nothing claimed
    #[must_use]
    pub const fn new(word: &Word) -> Self {
        Self {
            chars: *word.chars(),
            claimed: [false; WORD_LENGTH],
        }
    }

    /// Letter at `position`, or `None` once it has been claimed
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Option<u8> {
        if self.claimed[position] {
            None
        } else {
            Some(self.chars[position])
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_claimed(&self, position: usize) -> bool {
        self.claimed[position]
    }

    /// Number of positions still available for matching
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.claimed.iter().filter(|&&claimed| !claimed).count()
    }

    #[inline]
    fn claim(&mut self, position: usize) {
        self.claimed[position] = true;
    }

    /// First unclaimed position holding `letter`
    fn find_unclaimed(&self, letter: u8) -> Option<usize> {
        (0..WORD_LENGTH).find(|&j| self.letter_at(j) == Some(letter))
    }
}

impl From<&Word> for MaskedWord {
    fn from(word: &Word) -> Self {
        Self::new(word)
    }
}

/// Claimed positions render as `_`
impl fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..WORD_LENGTH {
            let c = self.letter_at(position).map_or('_', char::from);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Match `guess` against `answer`, claiming positions on both as matches are found
///
/// `on_match` is called once per match with its kind and the answer position that
/// was claimed. Positions already claimed on either side before the call take no
/// part in matching.
///
/// # Examples
/// ```
/// use best_wordle_words::core::{MaskedWord, MatchKind, Word, match_and_mark};
///
/// let mut guess = MaskedWord::new(&Word::new("aabbb").unwrap());
/// let mut answer = MaskedWord::new(&Word::new("ababa").unwrap());
/// let mut kinds = Vec::new();
///
/// match_and_mark(&mut guess, &mut answer, |kind, _| kinds.push(kind));
///
/// assert_eq!(
///     kinds,
///     [MatchKind::Exact, MatchKind::Exact, MatchKind::Offset, MatchKind::Offset]
/// );
/// assert_eq!(answer.to_string(), "____a");
/// ```
pub fn match_and_mark<F>(guess: &mut MaskedWord, answer: &mut MaskedWord, mut on_match: F)
where
    F: FnMut(MatchKind, usize),
{
    for i in 0..WORD_LENGTH {
        if let (Some(g), Some(a)) = (guess.letter_at(i), answer.letter_at(i))
            && g == a
        {
            guess.claim(i);
            answer.claim(i);
            on_match(MatchKind::Exact, i);
        }
    }

    for i in 0..WORD_LENGTH {
        let Some(letter) = guess.letter_at(i) else {
            continue;
        };
        if let Some(j) = answer.find_unclaimed(letter) {
            guess.claim(i);
            answer.claim(j);
            on_match(MatchKind::Offset, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masked(text: &str) -> MaskedWord {
        MaskedWord::new(&Word::new(text).unwrap())
    }

    fn run(guess: &str, answer: &str) -> (Vec<(MatchKind, usize)>, MaskedWord) {
        let mut g = masked(guess);
        let mut a = masked(answer);
        let mut matches = Vec::new();
        match_and_mark(&mut g, &mut a, |kind, pos| matches.push((kind, pos)));
        (matches, a)
    }

    #[test]
    fn identical_words_match_exactly_everywhere() {
        let (matches, answer) = run("crane", "crane");
        assert_eq!(matches.len(), WORD_LENGTH);
        assert!(matches.iter().all(|(kind, _)| *kind == MatchKind::Exact));
        assert_eq!(answer.remaining(), 0);
    }

    #[test]
    fn disjoint_words_do_not_match() {
        let (matches, answer) = run("crane", "ghost");
        assert!(matches.is_empty());
        assert_eq!(answer.to_string(), "ghost");
    }

    #[test]
    fn offset_claims_first_unclaimed_occurrence() {
        // e at 0 claims the first e in "geese" that survives the exact pass
        let (matches, answer) = run("exxxx", "geese");
        assert_eq!(matches, vec![(MatchKind::Offset, 1)]);
        assert_eq!(answer.to_string(), "g_ese");
    }

    #[test]
    fn repeated_guess_letters_are_credited_once_per_answer_letter() {
        let (matches, answer) = run("aabbb", "ababa");
        assert_eq!(
            matches,
            vec![
                (MatchKind::Exact, 0),
                (MatchKind::Exact, 3),
                (MatchKind::Offset, 2),
                (MatchKind::Offset, 1),
            ]
        );
        assert_eq!(answer.to_string(), "____a");
    }

    #[test]
    fn exact_pass_runs_before_offset_pass() {
        // the trailing s is exact, so the leading s finds nothing left to claim
        let (matches, _) = run("sxxxs", "abcds");
        assert_eq!(matches, vec![(MatchKind::Exact, 4)]);
    }

    #[test]
    fn pre_claimed_answer_positions_are_ignored() {
        let mut guess = masked("hairy");
        let mut answer = masked("happy");
        match_and_mark(&mut guess, &mut answer, |_, _| {});
        assert_eq!(answer.to_string(), "__pp_");

        let mut second = masked("happy");
        let mut matches = Vec::new();
        match_and_mark(&mut second, &mut answer, |kind, pos| matches.push((kind, pos)));
        assert_eq!(
            matches,
            vec![(MatchKind::Exact, 2), (MatchKind::Exact, 3)]
        );
    }

    #[test]
    fn masked_word_accessors() {
        let mut word = masked("happy");
        assert_eq!(word.letter_at(0), Some(b'h'));
        word.claim(0);
        assert!(word.is_claimed(0));
        assert_eq!(word.letter_at(0), None);
        assert_eq!(word.remaining(), 4);
        assert_eq!(word.to_string(), "_appy");
    }
}
