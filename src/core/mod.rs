//! Core domain types for Wordle scoring
//!
//! This module contains the word types and the shared letter-matching primitive.
//! Everything here is pure and has no I/O.

mod matching;
mod word;

pub use matching::{MaskedWord, MatchKind, match_and_mark};
pub use word::{WORD_LENGTH, Word, WordError};
