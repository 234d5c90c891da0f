//! Dictionary handling
//!
//! Turns a text file with one word per line into a candidate word set.

pub mod loader;

pub use loader::{load_from_file, read_lines, words_from_lines};
