//! Candidate word sets
//!
//! A `WordSet` is the live pool of words still consistent with everything the
//! player has learned. Filtering always builds a new set; the input is left
//! untouched, so a set only ever shrinks from one turn to the next.

use super::{Pattern, Word};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// A set of unique candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: FxHashSet<Word>,
}

impl WordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        if self.words.len() == 1 {
            self.words.iter().next()
        } else {
            None
        }
    }

    /// Words in lexicographic order, for stable display
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    fn retain_into(&self, keep: impl Fn(&Word) -> bool) -> Self {
        self.words.iter().filter(|&word| keep(word)).cloned().collect()
    }

    /// Keep the words consistent with `pattern`
    ///
    /// Words whose length differs from the pattern drop out because they never
    /// match. An empty result is a valid state meaning no word fits.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{Pattern, WordSet};
    ///
    /// let words: WordSet = ["cat", "car", "cot", "dog"].into_iter().collect();
    /// let filtered = words.filter_by_pattern(&Pattern::new("c__"));
    /// assert_eq!(filtered.len(), 3);
    /// ```
    #[must_use]
    pub fn filter_by_pattern(&self, pattern: &Pattern) -> Self {
        self.retain_into(|word| pattern.matches(word))
    }

    /// Keep the words that do not contain `letter` anywhere
    #[must_use]
    pub fn filter_by_excluded_letter(&self, letter: char) -> Self {
        self.retain_into(|word| !word.has_letter(letter))
    }

    /// Keep exactly the words that would turn `prior` into `observed` when
    /// `guess` is played
    ///
    /// A guess shows every occurrence of the letter, so a word that also has
    /// `guess` at a position `observed` leaves hidden is dropped.
    #[must_use]
    pub fn filter_by_outcome(&self, prior: &Pattern, guess: char, observed: &Pattern) -> Self {
        self.retain_into(|word| {
            prior.matches(word) && Pattern::reveal(word, prior, guess) == *observed
        })
    }

    /// Every distinct letter appearing in any candidate
    ///
    /// Letters already tried are left in; removing them is up to the caller,
    /// which owns the guess history.
    #[must_use]
    pub fn possible_guesses(&self) -> BTreeSet<char> {
        self.words
            .iter()
            .flat_map(|word| word.chars().iter().copied())
            .collect()
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'s> FromIterator<&'s str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        iter.into_iter().map(Word::new).collect()
    }
}

impl IntoIterator for WordSet {
    type Item = Word;
    type IntoIter = std::collections::hash_set::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
