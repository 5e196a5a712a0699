//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

pub mod alphabet;
mod pattern;
mod word;

pub use pattern::{DisplayPattern, Slot};
pub use word::{Word, WordError};
