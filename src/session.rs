//! Game session state
//!
//! A `GameSession` threads the candidate set, the revealed pattern and the
//! guess history from one turn to the next. The scoring functions themselves
//! stay stateless; the session only feeds them its current values.

use crate::core::{Pattern, PatternError, WILDCARD, Word, WordSet};
use crate::solver::entropy::{calculate_metrics, rank_guesses, select_best_guess};
use crate::solver::{GuessMetrics, RankedGuess, SolverError};
use log::debug;
use std::collections::BTreeSet;

/// Where a session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Exactly one candidate is left
    Solved(Word),
    /// No dictionary word fits the accumulated feedback
    NoCandidates,
    /// The miss limit was reached before the word was found
    OutOfMisses,
    /// Several candidates remain but every letter in them was already tried
    Stuck { remaining: usize },
    InProgress { remaining: usize },
}

#[derive(Debug, Clone)]
struct Snapshot {
    words: WordSet,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    misses: usize,
}

/// State of one hangman game
#[derive(Debug, Clone)]
pub struct GameSession {
    words: WordSet,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    misses: usize,
    max_misses: Option<usize>,
    undo_stack: Vec<Snapshot>,
}

impl GameSession {
    /// Start a game from a dictionary and the initially shown pattern
    ///
    /// Letters already shown in `pattern` are not counted as guessed, and
    /// words hiding further copies of them are kept.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{Pattern, WordSet};
    /// use hangman_entropy::session::{GameSession, SessionStatus};
    ///
    /// let dictionary: WordSet = ["cat", "car", "cot", "dog"].into_iter().collect();
    /// let session = GameSession::new(&dictionary, Pattern::new("c__"));
    ///
    /// assert_eq!(session.status(), SessionStatus::InProgress { remaining: 3 });
    /// ```
    #[must_use]
    pub fn new(dictionary: &WordSet, pattern: Pattern) -> Self {
        let words = dictionary.filter_by_pattern(&pattern);
        debug!(
            "new session with pattern {pattern}: {} of {} words match",
            words.len(),
            dictionary.len()
        );

        Self {
            words,
            pattern,
            guessed: BTreeSet::new(),
            misses: 0,
            max_misses: None,
            undo_stack: Vec::new(),
        }
    }

    /// Limit how many wrong letters the game allows
    #[must_use]
    pub fn with_max_misses(mut self, max_misses: Option<usize>) -> Self {
        self.max_misses = max_misses;
        self
    }

    #[must_use]
    pub const fn words(&self) -> &WordSet {
        &self.words
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Every letter offered so far, hit or miss
    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub const fn max_misses(&self) -> Option<usize> {
        self.max_misses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    /// Letters present in some candidate that have not been offered yet
    #[must_use]
    pub fn untried_letters(&self) -> BTreeSet<char> {
        self.words
            .possible_guesses()
            .difference(&self.guessed)
            .copied()
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.words.is_empty() {
            return SessionStatus::NoCandidates;
        }

        if let Some(word) = self.words.single() {
            return SessionStatus::Solved(word.clone());
        }

        if self.max_misses.is_some_and(|max| self.misses >= max) {
            return SessionStatus::OutOfMisses;
        }

        let remaining = self.words.len();
        if self.untried_letters().is_empty() {
            SessionStatus::Stuck { remaining }
        } else {
            SessionStatus::InProgress { remaining }
        }
    }

    /// Rank every untried letter by entropy
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidateSet`] if no candidates remain.
    pub fn rankings(&self) -> Result<Vec<RankedGuess>, SolverError> {
        rank_guesses(&self.words, &self.pattern, self.untried_letters())
    }

    /// The recommended next letter, or `None` if nothing is left to try
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidateSet`] if no candidates remain.
    pub fn suggest(&self) -> Result<Option<RankedGuess>, SolverError> {
        select_best_guess(&self.words, &self.pattern, self.untried_letters())
    }

    /// Detailed metrics for guessing `letter` now
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidateSet`] if no candidates remain.
    pub fn metrics(&self, letter: char) -> Result<GuessMetrics, SolverError> {
        calculate_metrics(&self.words, &self.pattern, letter)
    }

    /// Record that `letter` is in the word and `new_pattern` is now shown
    ///
    /// Candidates must match the new pattern and must not hold `letter` at
    /// any position that is still hidden.
    ///
    /// # Errors
    /// - [`PatternError::LengthMismatch`] or [`PatternError::RevealedLetterChanged`]
    ///   if `new_pattern` is not a legal successor of the current pattern
    /// - [`PatternError::LetterNotRevealed`] if `new_pattern` does not show
    ///   `letter` at any previously hidden position
    pub fn record_hit(&mut self, letter: char, new_pattern: Pattern) -> Result<(), PatternError> {
        self.pattern.check_update(&new_pattern)?;

        let newly_revealed = self
            .pattern
            .cells()
            .iter()
            .zip(new_pattern.cells())
            .any(|(&old, &new)| old == WILDCARD && new == letter);
        if !newly_revealed {
            return Err(PatternError::LetterNotRevealed { letter });
        }

        self.push_snapshot();

        // The outcome of `letter` alone; other letters revealed at the same
        // time are checked against the full pattern afterwards
        let observed: Pattern = self
            .pattern
            .cells()
            .iter()
            .zip(new_pattern.cells())
            .map(|(&old, &new)| if old == WILDCARD && new == letter { letter } else { old })
            .collect();

        let before = self.words.len();
        self.words = self.words.filter_by_outcome(&self.pattern, letter, &observed);
        if observed != new_pattern {
            self.words = self.words.filter_by_pattern(&new_pattern);
        }
        debug!(
            "hit '{letter}': {} -> {new_pattern}, candidates {before} -> {}",
            self.pattern,
            self.words.len()
        );

        self.pattern = new_pattern;
        self.guessed.insert(letter);
        Ok(())
    }

    /// Record that `letter` is not in the word
    pub fn record_miss(&mut self, letter: char) {
        self.push_snapshot();

        let before = self.words.len();
        self.words = self.words.filter_by_excluded_letter(letter);
        self.guessed.insert(letter);
        self.misses += 1;

        debug!(
            "miss '{letter}' ({} so far): candidates {before} -> {}",
            self.misses,
            self.words.len()
        );
    }

    /// Restore the state before the last recorded hit or miss
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };

        self.words = snapshot.words;
        self.pattern = snapshot.pattern;
        self.guessed = snapshot.guessed;
        self.misses = snapshot.misses;
        debug!("undo: back to {} with {} candidates", self.pattern, self.words.len());
        true
    }

    fn push_snapshot(&mut self) {
        self.undo_stack.push(Snapshot {
            words: self.words.clone(),
            pattern: self.pattern.clone(),
            guessed: self.guessed.clone(),
            misses: self.misses,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordSet {
        ["cat", "car", "cot", "cut", "dog", "cart"]
            .into_iter()
            .collect()
    }

    #[test]
    fn new_applies_initial_pattern() {
        let session = GameSession::new(&dictionary(), Pattern::new("c__"));
        assert_eq!(session.remaining(), 4);
        assert_eq!(session.misses(), 0);
        assert!(session.guessed().is_empty());
    }

    #[test]
    fn untried_letters_excludes_guessed() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        session.record_miss('u');

        let untried: Vec<char> = session.untried_letters().into_iter().collect();
        assert_eq!(untried, vec!['a', 'c', 'o', 'r', 't']);
    }

    #[test]
    fn record_hit_narrows_candidates() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        session.record_hit('a', Pattern::new("ca_")).unwrap();

        assert_eq!(session.pattern(), &Pattern::new("ca_"));
        assert_eq!(session.remaining(), 2);
        assert!(session.guessed().contains(&'a'));
        assert_eq!(session.misses(), 0);
    }

    #[test]
    fn record_hit_rejects_lost_letter() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("ca_"));
        let result = session.record_hit('t', Pattern::new("c_t"));

        assert!(matches!(
            result,
            Err(PatternError::RevealedLetterChanged { position: 1, .. })
        ));
        assert_eq!(session.pattern(), &Pattern::new("ca_"));
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn record_hit_requires_letter_to_appear() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        let result = session.record_hit('a', Pattern::new("c_t"));
        assert_eq!(result, Err(PatternError::LetterNotRevealed { letter: 'a' }));
    }

    #[test]
    fn record_hit_drops_words_hiding_the_letter() {
        let dictionary: WordSet = ["cat", "car", "caa", "cot"].into_iter().collect();
        let mut session = GameSession::new(&dictionary, Pattern::new("c__"));
        session.record_hit('a', Pattern::new("ca_")).unwrap();

        let expected: WordSet = ["cat", "car"].into_iter().collect();
        assert_eq!(session.words(), &expected);
    }

    #[test]
    fn record_hit_accepts_extra_revealed_letters() {
        let dictionary: WordSet = ["cat", "car", "caa", "bat", "tat"].into_iter().collect();
        let mut session = GameSession::new(&dictionary, Pattern::new("___"));
        session.record_hit('a', Pattern::new("ca_")).unwrap();

        let expected: WordSet = ["cat", "car"].into_iter().collect();
        assert_eq!(session.words(), &expected);
        assert_eq!(session.pattern(), &Pattern::new("ca_"));
    }

    #[test]
    fn initial_pattern_letters_are_not_guessed() {
        let session = GameSession::new(&dictionary(), Pattern::new("c__"));
        assert!(session.untried_letters().contains(&'c'));
    }

    #[test]
    fn record_miss_removes_letter() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        session.record_miss('a');

        assert_eq!(session.remaining(), 2);
        assert_eq!(session.misses(), 1);
        assert!(session.words().iter().all(|w| !w.has_letter('a')));
    }

    #[test]
    fn status_reports_solved() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        session.record_hit('o', Pattern::new("co_")).unwrap();
        assert_eq!(session.status(), SessionStatus::Solved(Word::new("cot")));
    }

    #[test]
    fn status_reports_no_candidates() {
        let session = GameSession::new(&dictionary(), Pattern::new("z__"));
        assert_eq!(session.status(), SessionStatus::NoCandidates);
        assert_eq!(session.rankings(), Err(SolverError::EmptyCandidateSet));
    }

    #[test]
    fn status_reports_out_of_misses() {
        let mut session =
            GameSession::new(&dictionary(), Pattern::new("c__")).with_max_misses(Some(1));
        session.record_miss('u');
        assert_eq!(session.status(), SessionStatus::OutOfMisses);
    }

    #[test]
    fn status_reports_in_progress() {
        let session = GameSession::new(&dictionary(), Pattern::new("___"));
        assert_eq!(session.status(), SessionStatus::InProgress { remaining: 5 });
    }

    #[test]
    fn suggestion_never_repeats_a_guess() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        let first = session.suggest().unwrap().unwrap();
        session.record_miss(first.letter);

        let second = session.suggest().unwrap().unwrap();
        assert_ne!(first.letter, second.letter);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut session = GameSession::new(&dictionary(), Pattern::new("c__"));
        session.record_miss('a');
        session.record_hit('o', Pattern::new("co_")).unwrap();

        assert!(session.undo());
        assert_eq!(session.pattern(), &Pattern::new("c__"));
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.misses(), 1);

        assert!(session.undo());
        assert_eq!(session.remaining(), 4);
        assert_eq!(session.misses(), 0);
        assert!(session.guessed().is_empty());

        assert!(!session.undo());
    }
}
