//! The query engine: free-text query in, ranked records out.
//!
//! [`search`] is a pure function of `(records, query, limit)` - no retained
//! state, safe to call on every keystroke. [`PreparedIndex`] layers a
//! derived token cache on top for hosts that do exactly that; it answers
//! identically and is rebuilt wholesale with its store.
//!
//! Ranking is deterministic: score descending, then category specificity,
//! then the generator's emission order (the sort is stable). Duplicate
//! `location` values are scored and returned independently - merging them
//! is the caller's choice, via [`dedup_by_location`].

use crate::scoring::{score_record, RecordTokens};
use crate::store::IndexStore;
use crate::types::{IndexRecord, ScoredRecord};
use crate::utils::tokenize;
use std::collections::HashSet;

/// Search `records` for `query`, ranked best-first.
///
/// `limit == 0` means "return everything". An empty or punctuation-only
/// query yields no tokens and therefore no results - that is not an error.
pub fn search(records: &[IndexRecord], query: &str, limit: usize) -> Vec<ScoredRecord> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let hits = records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            score_record(&RecordTokens::new(record), &tokens)
                .map(|score| Hit { position, score, specificity: record.category.specificity() })
        })
        .collect();

    collect_ranked(records, hits, limit)
}

/// Keep the best-scoring result per `location`.
///
/// The engine itself never deduplicates (documented behavior, not a
/// defect); hosts that want one entry per navigable target apply this to
/// the ranked results. Input order is ranking order, so "first seen" is
/// "best" and ties keep the earlier entry.
pub fn dedup_by_location(results: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|hit| seen.insert(hit.record.location.clone()))
        .collect()
}

/// A store plus per-record token cache, for keystroke-rate querying.
///
/// The cache is derived data only: it is built once from the store it owns,
/// never mutated afterwards, and a new documentation build means a new
/// `PreparedIndex`. Queries answer exactly like [`search`] over
/// [`IndexStore::all`].
#[derive(Debug, Clone)]
pub struct PreparedIndex {
    store: IndexStore,
    tokens: Vec<RecordTokens>,
}

impl PreparedIndex {
    /// Tokenize every record in the store once.
    pub fn new(store: IndexStore) -> Self {
        let tokens = store.all().iter().map(RecordTokens::new).collect();
        PreparedIndex { store, tokens }
    }

    /// The underlying store.
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Search against the cached tokens. Same contract as [`search`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredRecord> {
        let tokens = query_tokens(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let records = self.store.all();
        let hits = self
            .tokens
            .iter()
            .enumerate()
            .filter_map(|(position, record_tokens)| {
                score_record(record_tokens, &tokens).map(|score| Hit {
                    position,
                    score,
                    specificity: records[position].category.specificity(),
                })
            })
            .collect();

        collect_ranked(records, hits, limit)
    }
}

/// One scored candidate, still by position.
struct Hit {
    position: usize,
    score: f64,
    specificity: u8,
}

/// The query's token set: normalized, split, first occurrence kept.
fn query_tokens(query: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    tokenize(query)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Rank candidates and clone out the winners.
///
/// Stable sort: equal score and specificity fall back to emission order,
/// which `hits` already carries.
fn collect_ranked(records: &[IndexRecord], mut hits: Vec<Hit>, limit: usize) -> Vec<ScoredRecord> {
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.specificity.cmp(&a.specificity))
    });
    if limit > 0 {
        hits.truncate(limit);
    }
    hits.into_iter()
        .map(|hit| ScoredRecord {
            record: records[hit.position].clone(),
            score: hit.score,
        })
        .collect()
}
