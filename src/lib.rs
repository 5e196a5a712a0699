//! Hangman Solver
//!
//! Automatically plays hangman against Romanian target words, using a
//! reference dictionary as its only knowledge source. Each solve keeps a
//! set of dictionary candidates consistent with everything observed so far
//! and always guesses the letter found in the most surviving candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Word;
//! use hangman_solver::solver::Solver;
//! use hangman_solver::wordlists::Corpus;
//!
//! let corpus = Corpus::new(vec![
//!     Word::new("cer").unwrap(),
//!     Word::new("cot").unwrap(),
//!     Word::new("cad").unwrap(),
//! ]);
//!
//! let solver = Solver::new(corpus.words());
//! let report = solver.solve(&Word::new("cer").unwrap());
//!
//! assert!(report.success());
//! println!("Revealed in {} guesses", report.guess_count());
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Word list ingestion
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
