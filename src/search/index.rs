//! Inverted index from stem to the documents containing it.

use crate::{
    document::{CorpusDocument, DocId, QueryDocument},
    error::CorpusError,
};
use ahash::AHashMap;
use rust_stemmers::Stemmer;
use std::collections::BTreeSet;

use super::{
    query::matching_ids,
    tokenize::{Stem, Tokenizer},
};

static NO_DOCUMENTS: BTreeSet<DocId> = BTreeSet::new();

/// Map from stem to the ids of every document containing it in title or body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: AHashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    /// Records that document `id` contains `stem`.
    pub(super) fn insert(&mut self, stem: &str, id: DocId) {
        if let Some(ids) = self.postings.get_mut(stem) {
            ids.insert(id);
        } else {
            self.postings.insert(stem.to_string(), BTreeSet::from([id]));
        }
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.postings.contains_key(stem)
    }

    /// Ids of the documents containing `stem`, empty when it was never indexed.
    pub fn lookup(&self, stem: &str) -> &BTreeSet<DocId> {
        self.postings.get(stem).unwrap_or(&NO_DOCUMENTS)
    }

    /// Get the number of unique stems in the index
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Total number of (stem, document) pairs.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(BTreeSet::len).sum()
    }
}

/// The searchable corpus: the stem map, the documents it was built from, and
/// the tokenizer used for both documents and queries.
///
/// Read-only once built. Documents are borrowed from whoever loaded them.
pub struct SearchIndex<'c, S = Stemmer> {
    terms: InvertedIndex,
    documents: &'c [CorpusDocument],
    positions: AHashMap<DocId, usize>,
    tokenizer: Tokenizer<S>,
}

impl<'c, S: Stem> SearchIndex<'c, S> {
    /// Tokenizes every document and indexes its title and body stems.
    ///
    /// Fails if two documents share an id.
    pub fn build(
        documents: &'c [CorpusDocument],
        tokenizer: Tokenizer<S>,
    ) -> Result<Self, CorpusError> {
        let start = std::time::Instant::now();
        let mut terms = InvertedIndex::default();
        let mut positions = AHashMap::with_capacity(documents.len());

        for (position, document) in documents.iter().enumerate() {
            if let Some(&first) = positions.get(&document.id()) {
                let first: &CorpusDocument = &documents[first];
                return Err(CorpusError::DuplicateId {
                    id: document.id(),
                    first: first.title().to_string(),
                    second: document.title().to_string(),
                });
            }
            positions.insert(document.id(), position);

            let tokens = tokenizer.tokenize(document);
            for stem in tokens.iter() {
                terms.insert(stem, document.id());
            }
        }

        tracing::info!(
            "Built search index: {} unique stems, {} documents, {} stem-document pairs in {:?}",
            terms.term_count(),
            documents.len(),
            terms.posting_count(),
            start.elapsed()
        );

        Ok(Self {
            terms,
            documents,
            positions,
            tokenizer,
        })
    }

    /// Returns the documents containing every word of `query`, in corpus order.
    ///
    /// A query without words matches nothing.
    pub fn search(&self, query: &QueryDocument) -> Vec<&'c CorpusDocument> {
        let stems = self.tokenizer.tokenize(query).body;
        let matched = matching_ids(&self.terms, &stems);

        let documents = self.documents;
        let matches: Vec<_> = documents
            .iter()
            .filter(|document| matched.contains(&document.id()))
            .collect();

        tracing::debug!(
            "Query {:?} -> stems {:?}: {} matches",
            query.raw_text(),
            stems,
            matches.len()
        );
        matches
    }

    /// Stems `query` the same way documents were stemmed.
    pub fn query_stems(&self, query: &QueryDocument) -> Vec<String> {
        self.tokenizer.tokenize(query).body
    }

    /// Looks up a document by id.
    pub fn get(&self, id: DocId) -> Option<&'c CorpusDocument> {
        let documents = self.documents;
        self.positions.get(&id).map(|&position| &documents[position])
    }

    pub const fn terms(&self) -> &InvertedIndex {
        &self.terms
    }

    /// Documents in the order the index was built from.
    pub const fn documents(&self) -> &'c [CorpusDocument] {
        self.documents
    }

    /// Get the number of documents in the index
    pub const fn document_count(&self) -> usize {
        self.documents.len()
    }
}
