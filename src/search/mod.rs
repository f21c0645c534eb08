//! Full-text search infrastructure for the corpus.
//!
//! This module provides stemming tokenization, the inverted index, and
//! conjunctive (all words required) query evaluation.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use index::{InvertedIndex, SearchIndex};
pub use tokenize::{Stem, TokenSet, Tokenizer};
