//! Word solving command
//!
//! Plays a whole game against a known secret word and records every turn.

use crate::core::{Pattern, Word, WordSet};
use crate::session::{GameSession, SessionStatus};
use anyhow::{Result, ensure};
use log::{debug, info};

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Pattern shown before the first guess; all wildcards when `None`
    pub pattern: Option<Pattern>,
    pub max_misses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            pattern: None,
            max_misses: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: String,
    pub status: SessionStatus,
    pub steps: Vec<GuessStep>,
    pub misses: usize,
    pub initial_candidates: usize,
}

impl SolveResult {
    /// True if the game ended with the secret as the only candidate
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(&self.status, SessionStatus::Solved(word) if word.text() == self.secret)
    }
}

/// A single letter guess in the game
pub struct GuessStep {
    pub letter: char,
    pub hit: bool,
    pub entropy: f64,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word against `dictionary`
///
/// The game stops as soon as one candidate is left, none are left, the miss
/// limit is hit, or no untried letter remains.
///
/// # Errors
///
/// Returns an error if the starting pattern does not fit the secret word.
pub fn solve_word(config: SolveConfig, dictionary: &WordSet) -> Result<SolveResult> {
    let secret = Word::new(config.secret.as_str());
    let pattern = config
        .pattern
        .unwrap_or_else(|| Pattern::wildcards(secret.len()));

    ensure!(
        pattern.matches(&secret),
        "pattern '{pattern}' does not fit the secret word '{secret}'"
    );

    let mut session = GameSession::new(dictionary, pattern).with_max_misses(config.max_misses);
    let initial_candidates = session.remaining();
    let mut steps = Vec::new();

    info!("solving '{secret}' from {initial_candidates} candidates");

    loop {
        let status = session.status();
        let guess = match status {
            SessionStatus::InProgress { .. } => session.suggest()?,
            _ => None,
        };

        let Some(guess) = guess else {
            debug!("game over after {} guesses: {status:?}", steps.len());
            return Ok(SolveResult {
                secret: config.secret,
                status,
                steps,
                misses: session.misses(),
                initial_candidates,
            });
        };

        let candidates_before = session.remaining();
        let revealed = Pattern::reveal(&secret, session.pattern(), guess.letter);
        let hit = revealed != *session.pattern();

        if hit {
            session.record_hit(guess.letter, revealed.clone())?;
        } else {
            session.record_miss(guess.letter);
        }

        steps.push(GuessStep {
            letter: guess.letter,
            hit,
            entropy: guess.entropy,
            pattern: revealed,
            candidates_before,
            candidates_after: session.remaining(),
        });
    }
}
