//! Text normalization and stemming for indexing and queries.

use crate::document::Tokenizable;
use rust_stemmers::{Algorithm, Stemmer};

/// Characters replaced by a space before splitting. Replacing instead of
/// deleting keeps `love,love` as two words.
const PUNCTUATION: &[char] = &['.', ',', '\'', ';', ':', '!', '?'];

/// A deterministic word → stem function.
///
/// Implementations must be total: the empty string and any other input yield a
/// stem without failing, and the same input always yields the same stem.
pub trait Stem {
    fn stem_token(&self, token: &str) -> String;
}

impl Stem for Stemmer {
    fn stem_token(&self, token: &str) -> String {
        self.stem(token).into_owned()
    }
}

/// Stems of a tokenized document, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    pub title: Vec<String>,
    pub body: Vec<String>,
}

impl TokenSet {
    /// All stems, title first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.title.iter().chain(&self.body).map(String::as_str)
    }
}

/// Splits documents into title and body stems.
pub struct Tokenizer<S = Stemmer> {
    stemmer: S,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_algorithm(Algorithm::English)
    }
}

impl Tokenizer {
    /// Tokenizer backed by a snowball stemmer for `algorithm`.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::new(Stemmer::create(algorithm))
    }
}

impl<S: Stem> Tokenizer<S> {
    pub const fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// Tokenizes the title and body of `document` separately.
    pub fn tokenize<D: Tokenizable + ?Sized>(&self, document: &D) -> TokenSet {
        TokenSet {
            title: document
                .title_text()
                .map(|title| self.stem_line(title))
                .unwrap_or_default(),
            body: self.stem_line(document.body_text()),
        }
    }

    /// Normalizes and stems one line of text, keeping word order.
    pub fn stem_line(&self, line: &str) -> Vec<String> {
        normalize(line)
            .split_whitespace()
            .map(|token| self.stemmer.stem_token(token))
            .collect()
    }
}

/// Replaces punctuation with spaces and lowercases.
fn normalize(line: &str) -> String {
    line.replace(PUNCTUATION, " ").to_lowercase()
}
