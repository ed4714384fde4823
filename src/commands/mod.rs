//! Command implementations

pub mod benchmark;
pub mod filter;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, benchmark_progress_bar, run_benchmark, sample_targets};
pub use filter::run_filter;
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_word};
