//! Word lists for scoring
//!
//! Loading from disk, in-memory conversion, and building the candidate pool.

pub mod loader;

pub use loader::{MalformedPolicy, candidate_pool, load_from_file, words_from_slice};
