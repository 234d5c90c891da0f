//! Formatting utilities for terminal output

use crate::core::{Pattern, WILDCARD};
use colored::Colorize;

/// Render a pattern with revealed letters highlighted and spaced out
///
/// `ca_` becomes `c a _` with the letters in bold green.
#[must_use]
pub fn highlight_pattern(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|&cell| {
            if cell == WILDCARD {
                cell.to_string().bright_black().to_string()
            } else {
                cell.to_string().green().bold().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spell a pattern out plainly, one cell per slot
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the best possible score
///
/// `max_entropy` is normally log₂ of the candidate count.
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_separates_cells() {
        assert_eq!(spaced_pattern(&Pattern::new("ca_")), "c a _");
    }

    #[test]
    fn highlight_pattern_keeps_cell_count() {
        colored::control::set_override(false);
        assert_eq!(highlight_pattern(&Pattern::new("ca_")), "c a _");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(1.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn entropy_bar_full_at_max() {
        let bar = entropy_bar(2.0, 2.0, 5);
        assert_eq!(bar, "█████");
    }
}
