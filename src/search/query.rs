//! Conjunctive query evaluation over an [`InvertedIndex`].

use crate::document::DocId;
use ahash::{AHashMap, AHashSet};

use super::index::InvertedIndex;

/// Ids of the documents indexed under every stem of `stems`.
///
/// Each stem occurrence, repeats included, contributes its whole id set to a
/// candidate multiset. With `k` stems a document matches when its id occurs at
/// least `k` times. A stem adds a given id at most once, so that count is only
/// reached by documents holding every stem; repeating a query word therefore
/// never widens the result.
pub(crate) fn matching_ids(index: &InvertedIndex, stems: &[String]) -> AHashSet<DocId> {
    let required = stems.len();
    if required == 0 {
        return AHashSet::new();
    }

    let candidates: Vec<DocId> = stems
        .iter()
        .filter(|stem| index.contains(stem))
        .flat_map(|stem| index.lookup(stem).iter().copied())
        .collect();

    if required == 1 {
        return candidates.into_iter().collect();
    }

    let mut counts: AHashMap<DocId, usize> = AHashMap::with_capacity(candidates.len());
    for id in candidates {
        *counts.entry(id).or_insert(0) += 1;
    }

    tracing::trace!("{} stems, candidate counts {:?}", required, counts);

    counts
        .into_iter()
        .filter(|&(_, count)| count >= required)
        .map(|(id, _)| id)
        .collect()
}
