//! Best Wordle Words
//!
//! Ranks Wordle guesses by how well they overlap the answer list. A letter in the
//! right position is worth 3 points, a letter elsewhere in the answer 1 point,
//! and every answer letter can be credited only once per comparison.
//!
//! # Quick Start
//!
//! ```rust
//! use best_wordle_words::commands::{Corpora, best_first_words};
//! use best_wordle_words::wordlists::words_from_slice;
//!
//! let answers = words_from_slice(&["happy", "hairy"]);
//! let corpora = Corpora::from_words(answers, &[], "answers").unwrap();
//!
//! let report = best_first_words(&corpora);
//! let best: Vec<String> = report.best.iter().map(ToString::to_string).collect();
//! assert_eq!(best, ["hairy 24", "happy 24"]);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Scoring and ranking
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
