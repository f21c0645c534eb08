//! Corpus loading from PoetryDB-shaped JSON.
//!
//! The records are fetched by an external tool (e.g.
//! `curl https://poetrydb.org/author,title/Shakespeare;Sonnet`); this module
//! only parses what was saved.

use crate::{document::CorpusDocument, error::CorpusError};
use serde::Deserialize;
use std::path::Path;

/// One poem as delivered by the corpus source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoemRecord {
    pub title: String,
    /// Not indexed.
    #[serde(default)]
    pub author: String,
    pub lines: Vec<String>,
    /// PoetryDB sends this as a string; it is redundant with `lines`.
    #[serde(default)]
    pub linecount: Option<String>,
}

/// A source body is either the records or an error object.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceResponse {
    Records(Vec<PoemRecord>),
    Failure { status: u16, reason: String },
}

/// Parses the JSON body returned by the corpus source.
pub fn parse_records(json: &str) -> Result<Vec<PoemRecord>, CorpusError> {
    match serde_json::from_str::<SourceResponse>(json)? {
        SourceResponse::Records(records) => Ok(records),
        SourceResponse::Failure { status, reason } => Err(CorpusError::Source { status, reason }),
    }
}

/// Reads and parses a saved corpus file.
pub fn read_records(path: &Path) -> Result<Vec<PoemRecord>, CorpusError> {
    let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&json)?;
    tracing::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Converts records into documents, failing on the first malformed title.
pub fn into_documents(
    records: Vec<PoemRecord>,
    label: &str,
) -> Result<Vec<CorpusDocument>, CorpusError> {
    records
        .into_iter()
        .map(|record| CorpusDocument::from_record(record, label))
        .collect()
}

/// Loads the corpus file at `path` into documents, in file order.
pub fn load(path: &Path, label: &str) -> Result<Vec<CorpusDocument>, CorpusError> {
    into_documents(read_records(path)?, label)
}
