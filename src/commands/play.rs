//! Interactive hangman assistant
//!
//! Text-based loop: the player reports whether each suggested letter is in
//! the word, and the assistant narrows the dictionary down.

use crate::core::{Pattern, WordSet};
use crate::output::{print_game_over, print_play_banner, print_solved, print_turn};
use crate::session::{GameSession, SessionStatus};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;
use std::io::{self, BufRead, Write};

/// Configuration for interactive play
pub struct PlayConfig {
    /// Clear the terminal after every answered suggestion
    pub clear_screen: bool,
    pub max_misses: Option<usize>,
    /// List the remaining candidates once there are at most this many
    pub show_candidates: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clear_screen: false,
            max_misses: None,
            show_candidates: 10,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Games played during one interactive run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub solved: usize,
}

enum Flow {
    NewGame,
    Quit,
}

/// Run the interactive mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn run_play(dictionary: &WordSet, config: &PlayConfig) -> Result<PlaySummary> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_with_input(dictionary, config, &mut input)
}

/// Run the interactive mode reading answers from `input`
///
/// End of input quits cleanly.
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn play_with_input<R: BufRead>(
    dictionary: &WordSet,
    config: &PlayConfig,
    input: &mut R,
) -> Result<PlaySummary> {
    print_play_banner(dictionary.len());

    let mut summary = PlaySummary::default();

    while let Some(pattern) = prompt_initial_pattern(input)? {
        summary.games += 1;
        let mut session = GameSession::new(dictionary, pattern).with_max_misses(config.max_misses);

        let flow = play_game(&mut session, config, input, &mut summary)?;
        if matches!(flow, Flow::Quit) {
            break;
        }
        println!("\n🔄 New game started!\n");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(summary)
}

fn play_game<R: BufRead>(
    session: &mut GameSession,
    config: &PlayConfig,
    input: &mut R,
    summary: &mut PlaySummary,
) -> Result<Flow> {
    loop {
        match session.status() {
            SessionStatus::InProgress { .. } => {}
            SessionStatus::Solved(word) => {
                summary.solved += 1;
                print_solved(&word, session);
                return ask_play_again(input);
            }
            status => {
                print_game_over(&status, session);
                match prompt_after_game_over(input)? {
                    Some(Command::Undo) => {
                        undo(session);
                        continue;
                    }
                    Some(Command::NewGame) => return Ok(Flow::NewGame),
                    Some(Command::Quit) | None => return Ok(Flow::Quit),
                }
            }
        }

        let Some(guess) = session.suggest()? else {
            println!("No letters left to try.");
            return Ok(Flow::NewGame);
        };
        let metrics = session.metrics(guess.letter)?;
        print_turn(session, &guess, &metrics, config.show_candidates);

        loop {
            let prompt = format!(
                "Is '{}' in the word? (y/n, 'undo', 'new', 'quit')",
                guess.letter
            );
            let Some(answer) = get_user_input(input, &prompt)? else {
                return Ok(Flow::Quit);
            };

            match answer.to_lowercase().as_str() {
                "y" | "yes" => match prompt_revealed_pattern(session, guess.letter, input)? {
                    Some(true) => break,
                    Some(false) => {}
                    None => return Ok(Flow::Quit),
                },
                "n" | "no" => {
                    session.record_miss(guess.letter);
                    break;
                }
                "u" | "undo" => {
                    if undo(session) {
                        break;
                    }
                }
                "new" => return Ok(Flow::NewGame),
                "q" | "quit" | "exit" => return Ok(Flow::Quit),
                _ => println!("❌ Please answer 'y' or 'n'.\n"),
            }
        }

        if config.clear_screen {
            clear_screen()?;
        }
    }
}

enum Command {
    Undo,
    NewGame,
    Quit,
}

fn prompt_after_game_over<R: BufRead>(input: &mut R) -> Result<Option<Command>> {
    loop {
        let Some(answer) = get_user_input(input, "Type 'undo' to go back, 'new' or 'quit'")? else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "u" | "undo" => return Ok(Some(Command::Undo)),
            "n" | "new" => return Ok(Some(Command::NewGame)),
            "q" | "quit" | "exit" => return Ok(Some(Command::Quit)),
            _ => println!("❌ Unknown command.\n"),
        }
    }
}

fn ask_play_again<R: BufRead>(input: &mut R) -> Result<Flow> {
    let answer = get_user_input(input, "Play again? (yes/no)")?;
    match answer.as_deref().map(str::to_lowercase).as_deref() {
        Some("yes" | "y") => Ok(Flow::NewGame),
        _ => Ok(Flow::Quit),
    }
}

fn undo(session: &mut GameSession) -> bool {
    if session.undo() {
        println!("✓ Undone! Back to {}\n", session.pattern());
        true
    } else {
        println!("Nothing to undo!\n");
        false
    }
}

/// Ask for the pattern shown at the start of a game; `None` means quit
fn prompt_initial_pattern<R: BufRead>(input: &mut R) -> Result<Option<Pattern>> {
    loop {
        let Some(answer) = get_user_input(
            input,
            "Enter the hidden letters (use _ for unknown, 'quit' to exit)",
        )?
        else {
            return Ok(None);
        };

        if matches!(answer.as_str(), "quit" | "exit") {
            return Ok(None);
        }

        match answer.parse::<Pattern>() {
            Ok(pattern) => return Ok(Some(pattern)),
            Err(e) => println!("❌ Invalid pattern: {e}\n"),
        }
    }
}

/// Ask for the pattern after a hit
///
/// Returns `Some(true)` once a valid pattern was recorded, `Some(false)` if
/// the player went back, `None` on end of input.
fn prompt_revealed_pattern<R: BufRead>(
    session: &mut GameSession,
    letter: char,
    input: &mut R,
) -> Result<Option<bool>> {
    loop {
        let prompt = format!(
            "Enter the pattern now shown (currently {}, or 'back')",
            session.pattern()
        );
        let Some(answer) = get_user_input(input, &prompt)? else {
            return Ok(None);
        };

        if answer == "back" {
            return Ok(Some(false));
        }

        let pattern = match answer.parse::<Pattern>() {
            Ok(pattern) => pattern,
            Err(e) => {
                println!("❌ Invalid pattern: {e}\n");
                continue;
            }
        };

        match session.record_hit(letter, pattern) {
            Ok(()) => return Ok(Some(true)),
            Err(e) => {
                debug!("rejected pattern update: {e}");
                println!("❌ {e}\n");
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
