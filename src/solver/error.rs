//! Solver error types

use thiserror::Error;

/// Errors raised by the scoring and ranking functions
///
/// These are contract violations by the caller, not recoverable game states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Entropy was requested over zero candidates
    #[error("no possibilities: the candidate set is empty")]
    EmptyCandidateSet,
}
