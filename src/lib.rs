//! Hangman Entropy
//!
//! A hangman assistant that recommends the next letter by maximizing the
//! expected information gain over the words still consistent with the game.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_entropy::core::{Pattern, WordSet};
//! use hangman_entropy::solver::rank_guesses;
//!
//! let dictionary: WordSet = ["cat", "car", "cot", "dog"].into_iter().collect();
//! let pattern = Pattern::new("c__");
//!
//! let candidates = dictionary.filter_by_pattern(&pattern);
//! let ranked = rank_guesses(&candidates, &pattern, candidates.possible_guesses()).unwrap();
//! println!("Best letter: {}", ranked[0]);
//! ```

// Core domain types
pub mod core;

// Scoring and ranking
pub mod solver;

// Turn-to-turn game state
pub mod session;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
