//! Core domain types for hangman solving
//!
//! Words, patterns and candidate sets. Everything here is a pure function of
//! its inputs: no I/O, no shared state.

mod pattern;
mod word;
mod word_set;

pub use pattern::{Pattern, PatternError, WILDCARD};
pub use word::Word;
pub use word_set::WordSet;
