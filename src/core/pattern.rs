//! Hangman pattern representation
//!
//! A pattern describes what is currently known about the secret word:
//! - a concrete character at a revealed position
//! - the wildcard `_` at a position not yet revealed
//!
//! Revealed positions are monotonic. Once a character is shown it never goes
//! back to `_` and never changes to another character.

use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker for an unrevealed position
pub const WILDCARD: char = '_';

/// Errors raised when reading or updating a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must not be empty")]
    Empty,

    #[error("pattern contains whitespace at position {position}")]
    Whitespace { position: usize },

    #[error("pattern must be {expected} characters long, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("'{letter}' does not appear at any newly revealed position")]
    LetterNotRevealed { letter: char },

    #[error("position {position} was already revealed as '{was}' but is now '{now}'")]
    RevealedLetterChanged {
        position: usize,
        was: char,
        now: char,
    },
}

/// Current knowledge of a secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Box<[char]>);

impl Pattern {
    /// Create a pattern from a string, taking every character literally
    ///
    /// `_` is the wildcard; anything else is a revealed character. Use
    /// [`str::parse`] instead for user input that should be validated.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().chars().collect())
    }

    /// A pattern with every position unrevealed
    #[must_use]
    pub fn wildcards(len: usize) -> Self {
        Self(vec![WILDCARD; len].into_boxed_slice())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.0
    }

    /// Number of revealed positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|&&ch| ch != WILDCARD).count()
    }

    /// Check whether `word` is consistent with this pattern
    ///
    /// Words of a different length never match. Otherwise every revealed
    /// position must equal the word's character there.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::new("c_t");
    /// assert!(pattern.matches(&Word::new("cat")));
    /// assert!(pattern.matches(&Word::new("cot")));
    /// assert!(!pattern.matches(&Word::new("car")));
    /// assert!(!pattern.matches(&Word::new("cart")));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.len() {
            return false;
        }

        self.0
            .iter()
            .zip(word.chars())
            .all(|(&cell, &ch)| cell == WILDCARD || cell == ch)
    }

    /// Simulate the pattern a player would see after guessing `guess` when
    /// the secret is `word` and `prior` is what was shown before
    ///
    /// Revealed characters in `prior` are kept as they are, whatever the guess.
    /// A wildcard position becomes `guess` when the word has `guess` there.
    /// The result always has the word's length: missing prior positions count
    /// as wildcards, so an empty prior is the all-wildcard pattern.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{Pattern, Word};
    ///
    /// let prior = Pattern::new("c__");
    /// assert_eq!(Pattern::reveal(&Word::new("cat"), &prior, 'a'), Pattern::new("ca_"));
    /// assert_eq!(Pattern::reveal(&Word::new("cot"), &prior, 'a'), prior);
    /// ```
    #[must_use]
    pub fn reveal(word: &Word, prior: &Pattern, guess: char) -> Self {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &ch)| match prior.0.get(i) {
                Some(&cell) if cell != WILDCARD => cell,
                _ if ch == guess => guess,
                _ => WILDCARD,
            })
            .collect()
    }

    /// Validate that `new` is a legal successor of this pattern
    ///
    /// # Errors
    /// - [`PatternError::LengthMismatch`] if the lengths differ
    /// - [`PatternError::RevealedLetterChanged`] if a revealed position was
    ///   hidden again or changed to another character
    pub fn check_update(&self, new: &Pattern) -> Result<(), PatternError> {
        if self.len() != new.len() {
            return Err(PatternError::LengthMismatch {
                expected: self.len(),
                actual: new.len(),
            });
        }

        for (position, (&was, &now)) in self.0.iter().zip(new.0.iter()).enumerate() {
            if was != WILDCARD && was != now {
                return Err(PatternError::RevealedLetterChanged { position, was, now });
            }
        }

        Ok(())
    }

    /// Check whether `new` keeps every revealed position of this pattern
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::Pattern;
    ///
    /// assert!(Pattern::new("c_t").is_valid_update(&Pattern::new("cat")));
    /// assert!(!Pattern::new("cat").is_valid_update(&Pattern::new("c_t")));
    /// ```
    #[must_use]
    pub fn is_valid_update(&self, new: &Pattern) -> bool {
        self.check_update(new).is_ok()
    }
}

impl FromIterator<char> for Pattern {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        if let Some(position) = s.chars().position(char::is_whitespace) {
            return Err(PatternError::Whitespace { position });
        }

        Ok(Self::new(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &*self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wildcards_has_requested_length() {
        let pattern = Pattern::wildcards(4);
        assert_eq!(pattern.to_string(), "____");
        assert_eq!(pattern.revealed_count(), 0);
        assert_eq!(Pattern::new("c_t").revealed_count(), 2);
    }

    #[test]
    fn matches_requires_equal_length() {
        let pattern = Pattern::new("___");
        assert!(pattern.matches(&Word::new("dog")));
        assert!(!pattern.matches(&Word::new("dogs")));
        assert!(!pattern.matches(&Word::new("do")));
    }

    #[test]
    fn matches_is_case_sensitive() {
        let pattern = Pattern::new("C__");
        assert!(pattern.matches(&Word::new("Cat")));
        assert!(!pattern.matches(&Word::new("cat")));
    }

    #[test]
    fn empty_pattern_matches_only_empty_word() {
        let pattern = Pattern::new("");
        assert!(pattern.matches(&Word::new("")));
        assert!(!pattern.matches(&Word::new("a")));
    }

    #[test]
    fn reveal_fills_every_occurrence() {
        let word = Word::new("banana");
        let revealed = Pattern::reveal(&word, &Pattern::wildcards(6), 'a');
        assert_eq!(revealed, Pattern::new("_a_a_a"));
    }

    #[test]
    fn reveal_with_empty_prior_uses_wildcards() {
        let word = Word::new("cat");
        assert_eq!(Pattern::reveal(&word, &Pattern::new(""), 't'), Pattern::new("__t"));
        assert_eq!(Pattern::reveal(&word, &Pattern::new(""), 'z'), Pattern::new("___"));
    }

    #[test]
    fn reveal_keeps_prior_letters_even_when_wrong() {
        // A revealed character is never overwritten, even if it disagrees with the word
        let word = Word::new("cat");
        let prior = Pattern::new("x__");
        assert_eq!(Pattern::reveal(&word, &prior, 'c'), Pattern::new("x__"));
        assert_eq!(Pattern::reveal(&word, &prior, 't'), Pattern::new("x_t"));
    }

    #[test]
    fn reveal_short_prior_pads_with_wildcards() {
        let word = Word::new("cats");
        assert_eq!(Pattern::reveal(&word, &Pattern::new("c_"), 's'), Pattern::new("c__s"));
    }

    #[test]
    fn check_update_accepts_new_reveals() {
        let old = Pattern::new("c_t");
        assert_eq!(old.check_update(&Pattern::new("cat")), Ok(()));
        assert_eq!(old.check_update(&Pattern::new("c_t")), Ok(()));
    }

    #[test]
    fn check_update_rejects_lost_letter() {
        let old = Pattern::new("cat");
        assert_eq!(
            old.check_update(&Pattern::new("c_t")),
            Err(PatternError::RevealedLetterChanged {
                position: 1,
                was: 'a',
                now: '_'
            })
        );
    }

    #[test]
    fn check_update_rejects_changed_letter() {
        let old = Pattern::new("c__");
        assert!(!old.is_valid_update(&Pattern::new("b__")));
    }

    #[test]
    fn check_update_rejects_length_change() {
        let old = Pattern::new("c__");
        assert_eq!(
            old.check_update(&Pattern::new("c___")),
            Err(PatternError::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn from_str_validates_input() {
        assert_eq!("c_t".parse::<Pattern>(), Ok(Pattern::new("c_t")));
        assert_eq!("".parse::<Pattern>(), Err(PatternError::Empty));
        assert_eq!(
            "c t".parse::<Pattern>(),
            Err(PatternError::Whitespace { position: 1 })
        );
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(Pattern::new("_a_a").to_string(), "_a_a");
    }

    fn word_and_pattern() -> impl Strategy<Value = (String, String)> {
        "[a-d]{1,6}".prop_flat_map(|word| {
            let len = word.chars().count();
            let cell = prop_oneof![Just(WILDCARD), proptest::char::range('a', 'd')];
            let pattern = proptest::collection::vec(cell, len)
                .prop_map(|cells| cells.into_iter().collect::<String>());
            (Just(word), pattern)
        })
    }

    proptest! {
        #[test]
        fn matches_iff_revealed_positions_agree((word, pattern) in word_and_pattern()) {
            let expected = word
                .chars()
                .zip(pattern.chars())
                .all(|(w, p)| p == WILDCARD || p == w);
            prop_assert_eq!(Pattern::new(&pattern).matches(&Word::new(word.as_str())), expected);
        }

        #[test]
        fn reveal_is_sticky((word, prior) in word_and_pattern(), guess in proptest::char::range('a', 'e')) {
            let prior = Pattern::new(&prior);
            let next = Pattern::reveal(&Word::new(word.as_str()), &prior, guess);

            prop_assert_eq!(next.len(), prior.len());
            prop_assert!(prior.is_valid_update(&next));
        }

        #[test]
        fn reveal_of_matching_word_still_matches(word in "[a-d]{1,6}", guess in proptest::char::range('a', 'e')) {
            let word = Word::new(word.as_str());
            let next = Pattern::reveal(&word, &Pattern::wildcards(word.len()), guess);

            prop_assert!(next.matches(&word));
        }
    }
}
