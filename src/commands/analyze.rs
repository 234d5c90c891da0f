//! Pattern analysis command
//!
//! Ranks every untried letter for a given game state.

use crate::core::{Pattern, WordSet};
use crate::session::GameSession;
use crate::solver::{GuessMetrics, RankedGuess};
use anyhow::Result;

/// Configuration for analyzing a game state
pub struct AnalyzeConfig {
    pub pattern: Pattern,
    /// Letters already known to be absent
    pub excluded: Vec<char>,
    /// How many ranked letters to keep
    pub top: usize,
}

impl AnalyzeConfig {
    #[must_use]
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            excluded: Vec::new(),
            top: 10,
        }
    }
}

/// Result of analyzing a game state
pub struct AnalysisResult {
    pub pattern: Pattern,
    pub total_candidates: usize,
    /// Up to ten candidates in lexicographic order
    pub sample: Vec<String>,
    /// Best letters with their metrics, highest entropy first
    pub rankings: Vec<(RankedGuess, GuessMetrics)>,
}

impl AnalysisResult {
    /// Upper bound on entropy for this state, log₂ of the candidate count
    #[must_use]
    pub fn max_entropy(&self) -> f64 {
        (self.total_candidates.max(1) as f64).log2()
    }
}

/// Analyze a game state against `dictionary`
///
/// # Errors
///
/// Returns an error if scoring fails.
pub fn analyze_pattern(config: AnalyzeConfig, dictionary: &WordSet) -> Result<AnalysisResult> {
    let mut session = GameSession::new(dictionary, config.pattern.clone());
    for &letter in &config.excluded {
        session.record_miss(letter);
    }

    let words = session.words();
    let sample = words
        .sorted()
        .into_iter()
        .take(10)
        .map(|word| word.text().to_string())
        .collect();

    let rankings = if words.is_empty() {
        Vec::new()
    } else {
        session
            .rankings()?
            .into_iter()
            .take(config.top)
            .map(|guess| Ok((guess, session.metrics(guess.letter)?)))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(AnalysisResult {
        pattern: config.pattern,
        total_candidates: words.len(),
        sample,
        rankings,
    })
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
    fn analyze_ranks_letters() {
        let result = analyze_pattern(AnalyzeConfig::new(Pattern::new("c__")), &dictionary()).unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.sample, vec!["car", "cat", "cot", "cut"]);
        assert_eq!(result.rankings[0].0.letter, 'a');
        assert!(
            result
                .rankings
                .windows(2)
                .all(|pair| pair[0].0.entropy >= pair[1].0.entropy)
        );
    }

    #[test]
    fn analyze_applies_exclusions() {
        let mut config = AnalyzeConfig::new(Pattern::new("c__"));
        config.excluded = vec!['a', 'u'];

        let result = analyze_pattern(config, &dictionary()).unwrap();
        assert_eq!(result.total_candidates, 1);
        assert_eq!(result.sample, vec!["cot"]);
        assert!(result.rankings.iter().all(|(g, _)| g.letter != 'a' && g.letter != 'u'));
    }

    #[test]
    fn analyze_limits_rankings() {
        let mut config = AnalyzeConfig::new(Pattern::new("___"));
        config.top = 2;

        let result = analyze_pattern(config, &dictionary()).unwrap();
        assert_eq!(result.rankings.len(), 2);
    }

    #[test]
    fn analyze_with_no_candidates() {
        let result = analyze_pattern(AnalyzeConfig::new(Pattern::new("zz_")), &dictionary()).unwrap();

        assert_eq!(result.total_candidates, 0);
        assert!(result.sample.is_empty());
        assert!(result.rankings.is_empty());
    }

    #[test]
    fn analyze_max_entropy() {
        let result = analyze_pattern(AnalyzeConfig::new(Pattern::new("c__")), &dictionary()).unwrap();
        assert!((result.max_entropy() - 2.0).abs() < 1e-9);
    }
}
