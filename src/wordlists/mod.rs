//! Word list ingestion
//!
//! Turns the raw source files into a clean, de-duplicated [`Corpus`] the
//! solver can rely on.

mod corpus;
pub mod loader;

pub use corpus::Corpus;
