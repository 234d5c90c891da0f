//! Dictionary loading utilities
//!
//! Reading the file and building the word set are kept apart: `read_lines`
//! does the I/O, `words_from_lines` is a pure transform over its output.

use crate::core::{Word, WordSet};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Read a text file into its lines
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    debug!(
        "read {} bytes from {}",
        content.len(),
        path.as_ref().display()
    );
    Ok(content.lines().map(str::to_owned).collect())
}

/// Build a word set from dictionary lines
///
/// Each line is trimmed of surrounding whitespace; blank lines are skipped and
/// duplicates collapse. Nothing else is normalized.
///
/// Skipping blanks drops no candidate: an empty word matches no pattern,
/// since a pattern is never empty.
///
/// # Examples
/// ```
/// use hangman_entropy::core::Word;
/// use hangman_entropy::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["  cat\t", "dog", "", "cat"]);
/// assert_eq!(words.len(), 2);
/// assert!(words.contains(&Word::new("cat")));
/// ```
#[must_use]
pub fn words_from_lines<I, S>(lines: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Word::new(trimmed))
            }
        })
        .collect()
}

/// Load a dictionary file into a word set
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_entropy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSet> {
    let lines = read_lines(path.as_ref())?;
    let words = words_from_lines(&lines);
    info!(
        "loaded {} unique words from {} lines of {}",
        words.len(),
        lines.len(),
        path.as_ref().display()
    );
    Ok(words)
}
