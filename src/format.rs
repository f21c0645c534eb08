//! Presentation of search results as text or JSON.

use crate::document::{CorpusDocument, DocId};
use serde::Serialize;
use std::fmt::Write as _;

/// One line stating how many documents matched `query`.
///
/// `label` names a single document (e.g. `Sonnet`).
pub fn summary(count: usize, query: &str, label: &str) -> String {
    let noun = label.to_lowercase();
    if count == 1 {
        format!("There is 1 {noun} which contains the word(s): {query}")
    } else {
        format!("There are {count} {noun}s which contain the word(s): {query}")
    }
}

/// Heading line followed by the body lines, indented.
pub fn render_document(document: &CorpusDocument) -> String {
    let mut output = format!("{}: {}\n", document.heading(), document.title());
    for line in document.lines() {
        let _ = writeln!(output, "    {}", line);
    }
    output
}

/// Summary followed by every match, separated by blank lines.
pub fn render_matches(query: &str, label: &str, matches: &[&CorpusDocument]) -> String {
    let mut output = summary(matches.len(), query, label);
    output.push('\n');
    for document in matches {
        output.push('\n');
        output.push_str(&render_document(document));
    }
    output
}

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    id: DocId,
    heading: &'a str,
    title: &'a str,
    lines: &'a [String],
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    stems: &'a [String],
    count: usize,
    hits: Vec<SearchHit<'a>>,
}

/// Machine-readable form of a search, for `--json`.
pub fn matches_json(
    query: &str,
    stems: &[String],
    matches: &[&CorpusDocument],
) -> serde_json::Result<String> {
    let report = SearchReport {
        query,
        stems,
        count: matches.len(),
        hits: matches
            .iter()
            .map(|document| SearchHit {
                id: document.id(),
                heading: document.heading(),
                title: document.title(),
                lines: document.lines(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
