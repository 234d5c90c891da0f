//! Entropy-based letter ranking
//!
//! Orders candidate letters by the information they are expected to reveal.

use super::calculator::calculate_entropy;
use crate::core::{Pattern, WordSet};
use crate::solver::SolverError;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

/// A candidate letter and its entropy in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub letter: char,
    pub entropy: f64,
}

impl RankedGuess {
    /// Higher entropy first, ties broken by ascending letter
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .entropy
            .total_cmp(&self.entropy)
            .then_with(|| self.letter.cmp(&other.letter))
    }
}

impl fmt::Display for RankedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({:.3} bits)", self.letter, self.entropy)
    }
}

/// Rank every letter in `letters` by expected information gain
///
/// The result holds one entry per distinct letter, with entropy
/// non-increasing along the sequence. Index 0 is the recommended guess.
///
/// # Errors
/// Returns [`SolverError::EmptyCandidateSet`] if `words` is empty; callers
/// must check for the no-candidate state before ranking.
///
/// # Examples
/// ```
/// use hangman_entropy::core::{Pattern, WordSet};
/// use hangman_entropy::solver::entropy::rank_guesses;
///
/// let words: WordSet = ["cat", "car", "cot"].into_iter().collect();
/// let ranked = rank_guesses(&words, &Pattern::new("c__"), ['a', 'o', 't', 'r']).unwrap();
///
/// assert_eq!(ranked.len(), 4);
/// assert!(ranked.windows(2).all(|pair| pair[0].entropy >= pair[1].entropy));
/// ```
pub fn rank_guesses(
    words: &WordSet,
    current: &Pattern,
    letters: impl IntoIterator<Item = char>,
) -> Result<Vec<RankedGuess>, SolverError> {
    if words.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }

    let mut letters: Vec<char> = letters.into_iter().collect();
    letters.sort_unstable();
    letters.dedup();

    let mut ranked = letters
        .into_iter()
        .map(|letter| {
            let entropy = calculate_entropy(words, current, letter)?;
            trace!("letter '{letter}' scores {entropy:.4} bits");
            Ok(RankedGuess { letter, entropy })
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    ranked.sort_by(RankedGuess::rank_order);

    if let Some(best) = ranked.first() {
        debug!(
            "ranked {} letters over {} candidates, best {best}",
            ranked.len(),
            words.len()
        );
    }

    Ok(ranked)
}

/// Select the single best letter
///
/// Returns `None` if `letters` is empty.
///
/// # Errors
/// Returns [`SolverError::EmptyCandidateSet`] if `words` is empty.
pub fn select_best_guess(
    words: &WordSet,
    current: &Pattern,
    letters: impl IntoIterator<Item = char>,
) -> Result<Option<RankedGuess>, SolverError> {
    Ok(rank_guesses(words, current, letters)?.into_iter().next())
}
