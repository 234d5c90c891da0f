//! Letter selection algorithms
//!
//! Outcome simulation, entropy scoring and ranking of candidate letters.

pub mod entropy;
mod error;
mod partition;

pub use entropy::{GuessMetrics, RankedGuess, rank_guesses};
pub use error::SolverError;
pub use partition::OutcomePartition;
