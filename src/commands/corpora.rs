//! Loaded corpora shared by every analysis

use crate::core::Word;
use crate::error::AnalysisError;
use crate::wordlists::{MalformedPolicy, candidate_pool, load_from_file};
use log::info;
use std::path::PathBuf;

/// Answers file used when none is given
pub const DEFAULT_ANSWERS_FILE: &str = "answersTiny.txt";

/// Guesses file used when none is given
pub const DEFAULT_GUESSES_FILE: &str = "guessesTiny.txt";

/// Where the corpora come from and how to read them
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub answers_path: PathBuf,
    pub guesses_path: PathBuf,
    pub malformed: MalformedPolicy,
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            answers_path: PathBuf::from(DEFAULT_ANSWERS_FILE),
            guesses_path: PathBuf::from(DEFAULT_GUESSES_FILE),
            malformed: MalformedPolicy::Skip,
            show_progress: true,
        }
    }
}

/// Answer corpus plus the candidate pool built from answers and guesses
///
/// The answer list is never modified after loading; second-word analysis
/// depletes copies of it.
#[derive(Debug, Clone)]
pub struct Corpora {
    answers: Vec<Word>,
    guesses_count: usize,
    pool: Vec<Word>,
}

impl Corpora {
    /// Load both corpora described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read, if a malformed word is
    /// rejected, or if the answers corpus ends up empty.
    pub fn load(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let answers = load_from_file(&config.answers_path, config.malformed)?;
        let guesses = load_from_file(&config.guesses_path, config.malformed)?;
        info!(
            "{} has {} words, {} has {} words",
            config.answers_path.display(),
            answers.len(),
            config.guesses_path.display(),
            guesses.len()
        );

        Self::from_words(
            answers,
            &guesses,
            &config.answers_path.display().to_string(),
        )
    }

    /// Build corpora from words already in memory
    ///
    /// `answers_name` only labels the empty-corpus error.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyCorpus` if `answers` is empty.
    pub fn from_words(
        answers: Vec<Word>,
        guesses: &[Word],
        answers_name: &str,
    ) -> Result<Self, AnalysisError> {
        if answers.is_empty() {
            return Err(AnalysisError::EmptyCorpus {
                name: answers_name.to_string(),
            });
        }

        let pool = candidate_pool(&answers, guesses);
        Ok(Self {
            answers,
            guesses_count: guesses.len(),
            pool,
        })
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Answers and guesses combined, without duplicates
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn guesses_count(&self) -> usize {
        self.guesses_count
    }
}
