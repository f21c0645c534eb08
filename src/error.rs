//! Error handling types and utilities.

use std::{num::ParseIntError, path::PathBuf};

use crate::document::DocId;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` in configuration and command handling.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the corpus cannot be loaded or indexed.
///
/// Any of these aborts the whole index build: ids must be complete and unique
/// for the index to be correct.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The title has no `:` between the `<Label> <N>` heading and the title text.
    #[error("title '{title}' is missing the ':' after its document number")]
    MissingSeparator { title: String },

    /// The heading number is not a positive integer.
    #[error("title '{title}' has an invalid document number '{number}'")]
    InvalidId {
        title: String,
        number: String,
        #[source]
        source: ParseIntError,
    },

    /// Two records produced the same id.
    #[error("document id {id} is used by both '{first}' and '{second}'")]
    DuplicateId {
        id: DocId,
        first: String,
        second: String,
    },

    #[error("failed to read corpus at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus records")]
    Parse(#[from] serde_json::Error),

    /// The corpus source answered with an error object instead of records.
    #[error("corpus source returned status {status}: {reason}")]
    Source { status: u16, reason: String },
}
