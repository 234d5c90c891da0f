//! Shannon entropy calculation for hangman outcomes
//!
//! Given a candidate set, the current pattern and a letter, computes the
//! expected information gained by guessing that letter.

use crate::core::{Pattern, WordSet};
use crate::solver::{OutcomePartition, SolverError};

/// Comprehensive metrics for evaluating a letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Share of candidates in which the letter would show up at a still-hidden
    /// position; zero for a letter that is already fully revealed
    pub hit_probability: f64,
}

/// Calculate Shannon entropy of an outcome partition
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a single bucket (the guess tells nothing)
/// - Returns log₂(n) when n candidates all land in distinct buckets
/// - Bucket sizes are summed in ascending order, so equal partitions give
///   bit-identical results
///
/// # Errors
/// Returns [`SolverError::EmptyCandidateSet`] if the partition holds no words.
///
/// # Examples
/// ```
/// use hangman_entropy::core::Pattern;
/// use hangman_entropy::solver::OutcomePartition;
/// use hangman_entropy::solver::entropy::entropy;
///
/// let partition: OutcomePartition = [
///     (Pattern::new("a_"), 1),
///     (Pattern::new("_a"), 1),
///     (Pattern::new("aa"), 1),
///     (Pattern::new("__"), 1),
/// ]
/// .into_iter()
/// .collect();
///
/// let bits = entropy(&partition).unwrap();
/// assert!((bits - 2.0).abs() < 1e-9); // log2(4) = 2 bits
/// ```
pub fn entropy(partition: &OutcomePartition) -> Result<f64, SolverError> {
    let counts = partition.sorted_counts();
    let total = counts.iter().sum::<usize>();

    if total == 0 {
        return Err(SolverError::EmptyCandidateSet);
    }

    let total = total as f64;
    Ok(counts
        .into_iter()
        .filter(|&count| count > 0)
        .fold(0.0, |acc, count| {
            let count = count as f64;
            acc + (count / total) * (total / count).log2()
        }))
}

/// Calculate the entropy of guessing `guess` against `words`
///
/// # Errors
/// Returns [`SolverError::EmptyCandidateSet`] if `words` is empty.
pub fn calculate_entropy(
    words: &WordSet,
    current: &Pattern,
    guess: char,
) -> Result<f64, SolverError> {
    entropy(&OutcomePartition::compute(words, current, guess))
}

/// Calculate comprehensive metrics for a letter
///
/// Returns entropy, expected remaining candidates, max partition size and the
/// chance the letter reveals a new position.
///
/// # Errors
/// Returns [`SolverError::EmptyCandidateSet`] if `words` is empty.
pub fn calculate_metrics(
    words: &WordSet,
    current: &Pattern,
    guess: char,
) -> Result<GuessMetrics, SolverError> {
    let partition = OutcomePartition::compute(words, current, guess);
    let entropy = entropy(&partition)?;

    let total = partition.total() as f64;

    // Σ p(x) * |x|: the bucket a random secret falls in is proportionally larger
    let expected_remaining = partition
        .sorted_counts()
        .into_iter()
        .map(|count| {
            let count = count as f64;
            count * count / total
        })
        .sum();

    // Candidates whose outcome keeps the current pattern are misses
    let misses = partition.get(current);

    Ok(GuessMetrics {
        entropy,
        expected_remaining,
        max_partition: partition.largest_bucket(),
        hit_probability: 1.0 - misses as f64 / total,
    })
}
