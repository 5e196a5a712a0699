//! Command implementations

pub mod batch;
pub mod solve;

pub use batch::{BatchReport, WordResult, run_batch};
pub use solve::{SolveResult, solve_word};
