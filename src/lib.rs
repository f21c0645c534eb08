pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod format;
pub mod search;
pub mod tracing;

pub use config::{Language, Settings};
pub use document::{CorpusDocument, DocId, QueryDocument, Tokenizable};
pub use error::CorpusError;
pub use search::{InvertedIndex, SearchIndex, Stem, TokenSet, Tokenizer};
