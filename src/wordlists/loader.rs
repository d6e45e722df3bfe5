//! Word list loading utilities
//!
//! Word lists are plain text with one or more words per line, separated by any
//! whitespace.

use crate::core::Word;
use crate::error::CorpusError;
use clap::ValueEnum;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// What to do with a token that is not a valid word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    /// Log a warning and drop the token
    #[default]
    Skip,
    /// Fail the whole load
    Reject,
}

/// Load words from a file
///
/// # Errors
///
/// Returns `CorpusError::Unavailable` if the file cannot be read, and
/// `CorpusError::MalformedWord` for the first bad token under
/// `MalformedPolicy::Reject`.
///
/// # Examples
/// ```no_run
/// use best_wordle_words::wordlists::loader::{MalformedPolicy, load_from_file};
///
/// let words = load_from_file("answersTiny.txt", MalformedPolicy::Skip).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    policy: MalformedPolicy,
) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        for token in line.split_ascii_whitespace() {
            match Word::new(token) {
                Ok(word) => words.push(word),
                Err(source) => match policy {
                    MalformedPolicy::Skip => {
                        warn!("{}:{}: skipping '{token}': {source}", path.display(), index + 1);
                        skipped += 1;
                    }
                    MalformedPolicy::Reject => {
                        return Err(CorpusError::MalformedWord {
                            path: path.to_path_buf(),
                            line: index + 1,
                            token: token.to_string(),
                            source,
                        });
                    }
                },
            }
        }
    }

    debug!(
        "loaded {} words from {} ({skipped} skipped)",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use best_wordle_words::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["happy", "toolong", "hairy"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Candidate pool for guessing: answers first, then guesses, without duplicates
///
/// The first occurrence of a word decides its place.
#[must_use]
pub fn candidate_pool(answers: &[Word], guesses: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&Word> = FxHashSet::default();
    answers
        .iter()
        .chain(guesses)
        .filter(|word| seen.insert(*word))
        .cloned()
        .collect()
}
