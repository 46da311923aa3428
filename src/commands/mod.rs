//! Command implementations

pub mod analyse;
pub mod solve;

pub use analyse::{AnalyseConfig, AnalysisReport, DEFAULT_BUCKET_SIZE, run_analysis};
pub use solve::{SolveConfig, SolveError, SolveResult, solve_word};
