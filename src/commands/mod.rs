//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, AnalyzeConfig, analyze_pattern};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, PlaySummary, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
