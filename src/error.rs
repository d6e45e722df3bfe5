//! Error types for corpus loading and analysis

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a word list file into a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("could not open {} for reading", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: malformed word '{token}'", path.display())]
    MalformedWord {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: WordError,
    },
}

/// Failure of a first- or second-word analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("answers corpus {name} has no words")]
    EmptyCorpus { name: String },
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
