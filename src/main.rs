//! Hangman Entropy - CLI
//!
//! Interactive hangman assistant and batch tools built on entropy-driven
//! letter selection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_entropy::{
    commands::{
        AnalyzeConfig, BenchmarkConfig, PlayConfig, SolveConfig, analyze_pattern, run_benchmark,
        run_play, solve_word,
    },
    core::{Pattern, WordSet},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::load_from_file,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_entropy",
    about = "Hangman assistant that suggests the most informative letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play {
        /// Clear the screen after every answer
        #[arg(short, long)]
        clear: bool,

        /// Number of wrong letters allowed
        #[arg(short, long)]
        max_misses: Option<usize>,

        /// List remaining candidates once at most this many are left
        #[arg(short = 's', long, default_value = "10")]
        show_candidates: usize,
    },

    /// Play against a known secret word
    Solve {
        /// The secret word
        secret: String,

        /// Pattern shown before the first guess (defaults to all '_')
        #[arg(short, long)]
        pattern: Option<Pattern>,

        /// Number of wrong letters allowed
        #[arg(short, long)]
        max_misses: Option<usize>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank the letters for a game state
    Analyze {
        /// Current pattern, '_' for unrevealed positions
        pattern: Pattern,

        /// Letters known not to be in the word
        #[arg(short, long, default_value = "")]
        exclude: String,

        /// Number of letters to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Play against a sample of dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the words
        #[arg(long)]
        seed: Option<u64>,

        /// Number of wrong letters allowed
        #[arg(short, long)]
        max_misses: Option<usize>,
    },
}

fn load_dictionary(path: &Path) -> Result<WordSet> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    info!("dictionary ready: {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        clear: false,
        max_misses: None,
        show_candidates: 10,
    });

    match command {
        Commands::Play {
            clear,
            max_misses,
            show_candidates,
        } => {
            let config = PlayConfig {
                clear_screen: clear,
                max_misses,
                show_candidates,
            };
            run_play(&dictionary, &config)?;
            Ok(())
        }
        Commands::Solve {
            secret,
            pattern,
            max_misses,
            verbose,
        } => {
            let mut config = SolveConfig::new(secret);
            config.pattern = pattern;
            config.max_misses = max_misses;

            let result = solve_word(config, &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze {
            pattern,
            exclude,
            top,
        } => {
            let mut config = AnalyzeConfig::new(pattern);
            config.excluded = exclude.chars().filter(|c| !c.is_whitespace()).collect();
            config.top = top;

            let result = analyze_pattern(config, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_misses,
        } => {
            println!(
                "Running benchmark on {count} of {} words...",
                dictionary.len()
            );

            let mut config = BenchmarkConfig::new(count);
            config.seed = seed;
            config.max_misses = max_misses;

            let result = run_benchmark(&dictionary, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
