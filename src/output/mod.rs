//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;

pub use display::{print_batch_report, print_solve_result};
