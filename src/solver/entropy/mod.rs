//! Entropy-based letter selection
//!
//! Implements Shannon entropy over outcome partitions and ranks candidate
//! letters by expected information gain.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, entropy};
pub use selector::{RankedGuess, rank_guesses, select_best_guess};
