//! Display functions for command results

use super::formatters::{entropy_bar, highlight_pattern, spaced_pattern};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Word;
use crate::session::{GameSession, SessionStatus};
use crate::solver::{GuessMetrics, RankedGuess};
use colored::Colorize;

/// Print the welcome banner for interactive mode
pub fn print_play_banner(dictionary_size: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Hangman Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Dictionary: {dictionary_size} words");
    println!("I'll suggest the letter that tells us the most about the word.");
    println!("Enter patterns with revealed letters in place and '_' for the rest,");
    println!("for example 'c__' for a three-letter word starting with c.\n");
}

/// Print the state of a turn and the suggested letter
pub fn print_turn(
    session: &GameSession,
    guess: &RankedGuess,
    metrics: &GuessMetrics,
    show_candidates: usize,
) {
    let remaining = session.remaining();

    println!("────────────────────────────────────────────────────────────");
    let pattern = session.pattern();
    println!(
        "Pattern: {}   ({}/{} revealed, {remaining} candidates remaining)",
        highlight_pattern(pattern),
        pattern.revealed_count(),
        pattern.len()
    );
    if !session.guessed().is_empty() {
        let tried: String = session.guessed().iter().collect();
        let misses = match session.max_misses() {
            Some(max) => format!("{}/{max}", session.misses()),
            None => session.misses().to_string(),
        };
        println!("Tried:   {}   misses: {misses}", tried.bright_black());
    }
    println!("────────────────────────────────────────────────────────────");

    println!(
        "\n📊 Suggested letter: {}",
        guess.letter.to_string().bright_yellow().bold()
    );
    println!("   Entropy:          {:.3} bits", metrics.entropy);
    println!(
        "   Hit chance:       {:.1}%",
        metrics.hit_probability * 100.0
    );
    println!(
        "   Expected remain:  {:.1} candidates",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:       {} candidates\n",
        metrics.max_partition
    );

    if remaining <= show_candidates {
        println!("Remaining candidates:");
        for word in session.words().sorted() {
            println!("  • {word}");
        }
        println!();
    }
}

/// Print the celebration once a single candidate is left
pub fn print_solved(word: &Word, session: &GameSession) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        🎉  W O R D   F O U N D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  The word is {}", word.text().bright_yellow().bold());
    println!(
        "  Letters tried: {}, misses: {}",
        session.guessed().len(),
        session.misses()
    );
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Print why a game cannot continue
pub fn print_game_over(status: &SessionStatus, session: &GameSession) {
    match status {
        SessionStatus::NoCandidates => {
            println!(
                "\n{}",
                "❌ No word in the dictionary fits. The feedback may be incorrect."
                    .red()
                    .bold()
            );
        }
        SessionStatus::OutOfMisses => {
            println!(
                "\n{}",
                format!("💀 Out of misses after {} wrong letters.", session.misses())
                    .red()
                    .bold()
            );
        }
        SessionStatus::Stuck { remaining } => {
            println!(
                "\n{}",
                format!("🤔 Every letter has been tried but {remaining} words remain:")
                    .yellow()
                    .bold()
            );
            for word in session.words().sorted() {
                println!("  • {word}");
            }
        }
        SessionStatus::Solved(word) => print_solved(word, session),
        SessionStatus::InProgress { .. } => {}
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} candidates)",
        result.secret.bright_yellow().bold(),
        result.initial_candidates
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.hit { "✓".green() } else { "✗".red() };
        println!(
            "\nTurn {}: '{}' {mark}  {}",
            i + 1,
            step.letter,
            spaced_pattern(&step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} misses!",
                result.steps.len(),
                result.misses
            )
            .green()
            .bold()
        );
    } else {
        let reason = match &result.status {
            SessionStatus::Solved(word) => format!("settled on '{word}' instead"),
            SessionStatus::NoCandidates => "no dictionary word fits".to_string(),
            SessionStatus::OutOfMisses => "ran out of misses".to_string(),
            SessionStatus::Stuck { remaining } => format!("{remaining} words left, nothing to try"),
            SessionStatus::InProgress { remaining } => format!("stopped with {remaining} words left"),
        };
        println!(
            "{}",
            format!("❌ Failed after {} guesses: {reason}", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a pattern analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER ANALYSIS:".bright_cyan().bold(),
        highlight_pattern(&result.pattern)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} matching words", result.total_candidates);
    if !result.sample.is_empty() {
        let more = result.total_candidates.saturating_sub(result.sample.len());
        let suffix = if more > 0 {
            format!(" … and {more} more")
        } else {
            String::new()
        };
        println!("   {}{suffix}", result.sample.join(", "));
    }

    if result.rankings.is_empty() {
        println!("\n   Nothing left to rank.");
        return;
    }

    let max_entropy = result.max_entropy();
    println!();
    for (rank, (guess, metrics)) in result.rankings.iter().enumerate() {
        let bar = entropy_bar(guess.entropy, max_entropy, 20);
        println!(
            "   {:>2}. {}  [{}] {}  hit {:5.1}%  worst {}",
            rank + 1,
            guess.letter.to_string().bright_yellow().bold(),
            bar.green(),
            format!("{:.3} bits", guess.entropy).bright_yellow(),
            metrics.hit_probability * 100.0,
            metrics.max_partition
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let solve_rate = if result.total_words == 0 {
        0.0
    } else {
        result.solved as f64 / result.total_words as f64 * 100.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({solve_rate:.1}%)",
        result.solved.to_string().green()
    );
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses)
            .bright_yellow()
            .bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!(
        "   Best case:        {}",
        format!("{} misses", result.min_misses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{} misses", result.max_misses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses:".bright_cyan().bold());
    for (&misses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {misses:>2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Not solved:".yellow().bold());
        for word in result.failures.iter().take(20) {
            println!("   {word}");
        }
    }
}
