//! Corpus and query documents.
//!
//! Both kinds expose their text through [`Tokenizable`]: a corpus document has a
//! title line and a body, a query has only a body.

use crate::{corpus::PoemRecord, error::CorpusError};
use std::{fmt, num::NonZeroU32};

/// Document identifier, the `<N>` of a `"<Label> <N>: <Title>"` heading.
pub type DocId = u32;

/// Label stripped from headings when none is configured.
pub const DEFAULT_LABEL: &str = "Sonnet";

/// Text sections consumed by the tokenizer.
pub trait Tokenizable {
    /// The title line, if the document has one.
    fn title_text(&self) -> Option<&str>;

    /// Everything after the title.
    fn body_text(&self) -> &str;
}

/// A document of the indexed corpus. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    id: DocId,
    /// Left side of the title field, e.g. `Sonnet 18`.
    heading: String,
    title: String,
    lines: Vec<String>,
    /// Body lines joined with single spaces.
    body: String,
}

impl CorpusDocument {
    /// Builds a document from a raw corpus record, stripping `label` from the heading.
    ///
    /// The title field is split on its first `:`. Whatever remains of the left
    /// side after removing `label` and whitespace must be a positive integer.
    pub fn from_record(record: PoemRecord, label: &str) -> Result<Self, CorpusError> {
        let Some((heading, title)) = record.title.split_once(':') else {
            return Err(CorpusError::MissingSeparator {
                title: record.title,
            });
        };

        let heading = heading.trim();
        let number = heading.strip_prefix(label).unwrap_or(heading).trim();
        let id = number
            .parse::<NonZeroU32>()
            .map_err(|source| CorpusError::InvalidId {
                title: record.title.clone(),
                number: number.to_string(),
                source,
            })?
            .get();

        Ok(Self {
            id,
            heading: heading.to_string(),
            title: title.trim().to_string(),
            body: record.lines.join(" "),
            lines: record.lines,
        })
    }

    pub const fn id(&self) -> DocId {
        self.id
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body lines as they appeared in the record.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full text as tokenized: the title, a newline, then the joined body.
    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

impl TryFrom<PoemRecord> for CorpusDocument {
    type Error = CorpusError;

    fn try_from(record: PoemRecord) -> Result<Self, Self::Error> {
        Self::from_record(record, DEFAULT_LABEL)
    }
}

impl Tokenizable for CorpusDocument {
    fn title_text(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn body_text(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for CorpusDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.heading, self.title)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Free text entered by a user. All of its words are required to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDocument {
    raw: String,
}

impl QueryDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw
    }
}

impl Tokenizable for QueryDocument {
    fn title_text(&self) -> Option<&str> {
        None
    }

    fn body_text(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    fn record(title: &str, lines: &[&str]) -> PoemRecord {
        PoemRecord {
            title: title.to_string(),
            author: "William Shakespeare".to_string(),
            lines: lines.iter().map(ToString::to_string).collect(),
            linecount: None,
        }
    }

    #[rstest]
    #[case("Sonnet 12: When I do count the clock", 12)]
    #[case("Sonnet 1: From fairest creatures we desire increase", 1)]
    #[case("  Sonnet   154 :The little Love-god lying once asleep", 154)]
    #[case("7: No label at all", 7)]
    fn test_id_parsed_from_heading(#[case] title: &str, #[case] expected: DocId) {
        let_assert!(Ok(doc) = CorpusDocument::try_from(record(title, &[])));
        check!(doc.id() == expected);
    }

    #[test]
    fn test_title_is_right_of_first_colon() {
        let_assert!(
            Ok(doc) = CorpusDocument::try_from(record("Sonnet 12: Title: with colon", &[]))
        );
        check!(doc.title() == "Title: with colon");
        check!(doc.heading() == "Sonnet 12");
    }

    #[test]
    fn test_missing_colon_rejected() {
        let result = CorpusDocument::try_from(record("Sonnet 12 Title", &[]));
        let_assert!(Err(CorpusError::MissingSeparator { title }) = result);
        check!(title == "Sonnet 12 Title");
    }

    #[rstest]
    #[case("Sonnet XII: Roman numerals")]
    #[case("Sonnet 0: Zero is not an id")]
    #[case("Sonnet -3: Negative")]
    #[case("Poem 3: Wrong label")]
    #[case(": Empty heading")]
    fn test_invalid_number_rejected(#[case] title: &str) {
        let result = CorpusDocument::try_from(record(title, &[]));
        check!(matches!(result, Err(CorpusError::InvalidId { .. })));
    }

    #[test]
    fn test_custom_label() {
        let_assert!(Ok(doc) = CorpusDocument::from_record(record("Poem 3: Hi", &[]), "Poem"));
        check!(doc.id() == 3);
    }

    #[test]
    fn test_body_lines_joined_with_space() {
        let_assert!(
            Ok(doc) = CorpusDocument::try_from(record("Sonnet 2: T", &["end of line", "start"]))
        );
        check!(doc.body_text() == "end of line start");
        check!(doc.text() == "T\nend of line start");
        check!(doc.lines().len() == 2);
    }

    #[test]
    fn test_display_restores_heading_and_lines() {
        let_assert!(Ok(doc) = CorpusDocument::try_from(record("Sonnet 2: T", &["a", "b"])));
        check!(doc.to_string() == "Sonnet 2: T\na\nb");
    }

    #[test]
    fn test_query_has_no_title() {
        let query = QueryDocument::new("my love");
        check!(query.title_text().is_none());
        check!(query.body_text() == "my love");
    }
}
