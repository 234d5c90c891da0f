//! Outcome partitions
//!
//! Groups candidate words by the pattern a hypothetical guess would reveal.

use crate::core::{Pattern, WordSet};
use rustc_hash::FxHashMap;

/// Count of candidate words per resulting pattern
///
/// The counts always add up to the size of the word set it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomePartition {
    counts: FxHashMap<Pattern, usize>,
}

impl OutcomePartition {
    /// Simulate `guess` against every word in `words` starting from `current`
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{Pattern, WordSet};
    /// use hangman_entropy::solver::OutcomePartition;
    ///
    /// let words: WordSet = ["cat", "car", "cot"].into_iter().collect();
    /// let partition = OutcomePartition::compute(&words, &Pattern::new("c__"), 'a');
    ///
    /// assert_eq!(partition.get(&Pattern::new("ca_")), 2);
    /// assert_eq!(partition.get(&Pattern::new("c__")), 1);
    /// assert_eq!(partition.total(), 3);
    /// ```
    #[must_use]
    pub fn compute(words: &WordSet, current: &Pattern, guess: char) -> Self {
        let mut counts = FxHashMap::default();

        for word in words {
            let pattern = Pattern::reveal(word, current, guess);
            *counts.entry(pattern).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Total number of words across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Words producing `pattern`, zero if none do
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> usize {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    /// Size of the largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Bucket sizes in ascending order
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable();
        counts
    }
}

impl FromIterator<(Pattern, usize)> for OutcomePartition {
    fn from_iter<I: IntoIterator<Item = (Pattern, usize)>>(iter: I) -> Self {
        let mut counts = FxHashMap::default();
        for (pattern, count) in iter {
            *counts.entry(pattern).or_insert(0) += count;
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn partition_counts_sum_to_set_size() {
        let words = set(&["cat", "car", "cot", "cut", "cab"]);
        let partition = OutcomePartition::compute(&words, &Pattern::new("c__"), 't');
        assert_eq!(partition.total(), words.len());
    }

    #[test]
    fn partition_groups_by_revealed_pattern() {
        let words = set(&["cat", "car", "cot"]);
        let partition = OutcomePartition::compute(&words, &Pattern::new("c__"), 'a');

        assert_eq!(partition.len(), 2);
        assert_eq!(partition.get(&Pattern::new("ca_")), 2);
        assert_eq!(partition.get(&Pattern::new("c__")), 1);
        assert_eq!(partition.largest_bucket(), 2);
        assert_eq!(partition.sorted_counts(), vec![1, 2]);
    }

    #[test]
    fn absent_letter_gives_single_bucket() {
        let words = set(&["cat", "car", "cot"]);
        let current = Pattern::new("c__");
        let partition = OutcomePartition::compute(&words, &current, 'z');

        assert_eq!(partition.len(), 1);
        assert_eq!(partition.get(&current), 3);
    }

    #[test]
    fn empty_set_gives_empty_partition() {
        let partition = OutcomePartition::compute(&WordSet::new(), &Pattern::new("___"), 'a');
        assert!(partition.is_empty());
        assert_eq!(partition.total(), 0);
        assert_eq!(partition.largest_bucket(), 0);
    }

    #[test]
    fn partition_is_deterministic() {
        let words = set(&["banana", "bandana", "cabana", "savanna"]);
        let current = Pattern::wildcards(6);
        let first = OutcomePartition::compute(&words, &current, 'a');
        let second = OutcomePartition::compute(&words, &current, 'a');
        assert_eq!(first, second);
    }

    #[test]
    fn from_iter_merges_duplicate_patterns() {
        let partition: OutcomePartition = [
            (Pattern::new("a_"), 1),
            (Pattern::new("a_"), 2),
            (Pattern::new("_b"), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(partition.get(&Pattern::new("a_")), 3);
        assert_eq!(partition.total(), 4);
    }
}
