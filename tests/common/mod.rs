//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_corpus`: the sonnets shipped in `data/sonnets.json` (1, 18, 116, 130)
//! - `tiny_corpus`: two one-line documents, "my love is fair" and "the sun is hot"
//!
//! Fixtures return owned documents; tests build a [`SearchIndex`] borrowing them.
//!
//! [`SearchIndex`]: sonnet_search::SearchIndex

use rstest::fixture;
use sonnet_search::{CorpusDocument, DocId, corpus, corpus::PoemRecord};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A temporary directory for corpus and settings files, removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content and returns its full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a corpus document from a title and body lines.
#[allow(dead_code)]
pub fn document(title: &str, lines: &[&str]) -> CorpusDocument {
    let record = PoemRecord {
        title: title.to_string(),
        author: "William Shakespeare".to_string(),
        lines: lines.iter().map(ToString::to_string).collect(),
        linecount: Some(lines.len().to_string()),
    };
    CorpusDocument::try_from(record).expect("valid test record")
}

/// Ids of `documents`, in order.
#[allow(dead_code)]
pub fn ids(documents: &[&CorpusDocument]) -> Vec<DocId> {
    documents.iter().map(|document| document.id()).collect()
}

#[allow(dead_code)]
#[fixture]
pub fn sample_corpus() -> Vec<CorpusDocument> {
    corpus::load(&project_root().join("data/sonnets.json"), "Sonnet")
        .expect("sample corpus loads")
}

#[allow(dead_code)]
#[fixture]
pub fn tiny_corpus() -> Vec<CorpusDocument> {
    vec![
        document("Sonnet 1: First", &["my love is fair"]),
        document("Sonnet 2: Second", &["the sun is hot"]),
    ]
}
