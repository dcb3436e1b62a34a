//! Relevance scoring for query matches.
//!
//! A record's score for a query is a weighted sum over the query's token
//! set. The weight ladder keeps field tiers far apart, the same way the
//! title/heading/content ladder does in any sane site search:
//!
//! ```text
//! exact title token     100.0  per token
//! title substring        10.0  per token (only when not an exact hit)
//! text coverage           5.0  × (matching tokens / token count)
//! page / category hint    1.0  per token and field
//! ```
//!
//! # INVARIANTS
//!
//! - **TIER_DOMINANCE**: one exact title hit outweighs any single token's
//!   worth of lower-tier contributions: `100 > 10 + 5 + 1 + 1`.
//! - **COVERAGE_BOUNDED**: the text term is scaled by coverage, never by
//!   raw occurrence count, so long excerpts cannot dominate by length.
//! - A record with zero contributions is *excluded*, not ranked at 0.0.

use crate::types::IndexRecord;
use crate::utils::{normalize, tokenize};
use std::collections::HashSet;

/// Weight of an exact (case-insensitive) query-token hit in `title`.
pub const TITLE_EXACT_WEIGHT: f64 = 100.0;
/// Weight of a substring hit in the normalized `title`.
pub const TITLE_SUBSTRING_WEIGHT: f64 = 10.0;
/// Ceiling of the `text` contribution; scaled by token coverage.
pub const TEXT_WEIGHT: f64 = 5.0;
/// Weight of a token hit in `page` or in the `category` tag.
pub const STRUCTURAL_WEIGHT: f64 = 1.0;

/// A record's fields, tokenized once for matching.
///
/// This is the derived, per-record view the engine scores against. Building
/// it is pure; [`PreparedIndex`](crate::search::PreparedIndex) memoizes it
/// across calls and rebuilds it wholesale with the store.
#[derive(Debug, Clone)]
pub struct RecordTokens {
    title: Vec<String>,
    /// Normalized title for substring checks.
    title_text: String,
    text: HashSet<String>,
    page: Vec<String>,
    category: Vec<String>,
}

impl RecordTokens {
    /// Tokenize one record's searchable fields.
    pub fn new(record: &IndexRecord) -> Self {
        RecordTokens {
            title: tokenize(&record.title),
            title_text: normalize(&record.title),
            text: tokenize(&record.text).into_iter().collect(),
            page: tokenize(&record.page),
            category: tokenize(record.category.as_str()),
        }
    }
}

/// Score one record against a deduplicated query token set.
///
/// Returns `None` when nothing contributes - such records are not
/// candidates at all. `query` must be non-empty and already normalized;
/// [`search`](crate::search::search) guarantees both.
pub fn score_record(tokens: &RecordTokens, query: &[String]) -> Option<f64> {
    let mut score = 0.0;
    let mut text_hits = 0usize;

    for token in query {
        if tokens.title.iter().any(|t| t == token) {
            score += TITLE_EXACT_WEIGHT;
        } else if !tokens.title_text.is_empty() && tokens.title_text.contains(token.as_str()) {
            score += TITLE_SUBSTRING_WEIGHT;
        }
        if tokens.text.contains(token.as_str()) {
            text_hits += 1;
        }
        if tokens.page.iter().any(|t| t == token) {
            score += STRUCTURAL_WEIGHT;
        }
        if tokens.category.iter().any(|t| t == token) {
            score += STRUCTURAL_WEIGHT;
        }
    }

    if text_hits > 0 {
        score += TEXT_WEIGHT * (text_hits as f64 / query.len() as f64);
    }

    if score > 0.0 {
        Some(score)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(title: &str, text: &str, page: &str, category: Category) -> IndexRecord {
        IndexRecord {
            location: "x/".to_string(),
            page: page.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            category,
        }
    }

    fn score(record: &IndexRecord, query: &str) -> Option<f64> {
        let tokens = RecordTokens::new(record);
        let query: Vec<String> = tokenize(query);
        score_record(&tokens, &query)
    }

    #[test]
    fn tier_dominance_holds() {
        assert!(
            TITLE_EXACT_WEIGHT
                > TITLE_SUBSTRING_WEIGHT + TEXT_WEIGHT + 2.0 * STRUCTURAL_WEIGHT
        );
    }

    #[test]
    fn exact_title_hit_scores_highest_tier() {
        let exact = record("Graph Kernels", "", "", Category::Section);
        assert_eq!(score(&exact, "graph"), Some(TITLE_EXACT_WEIGHT));
    }

    #[test]
    fn substring_title_hit_scores_medium_tier() {
        let sub = record("Subgraphs", "", "", Category::Section);
        assert_eq!(score(&sub, "graph"), Some(TITLE_SUBSTRING_WEIGHT));
    }

    #[test]
    fn exact_hit_does_not_double_count_as_substring() {
        let exact = record("graph", "", "", Category::Section);
        assert_eq!(score(&exact, "graph"), Some(TITLE_EXACT_WEIGHT));
    }

    #[test]
    fn text_contribution_scales_with_coverage() {
        let r = record("", "compare two graphs quickly", "", Category::Section);
        // one of two tokens present in text
        assert_eq!(score(&r, "compare nothing"), Some(TEXT_WEIGHT * 0.5));
        // both tokens present
        assert_eq!(score(&r, "compare quickly"), Some(TEXT_WEIGHT));
    }

    #[test]
    fn text_contribution_ignores_repetition() {
        let spam = record("", &"graph ".repeat(200), "", Category::Section);
        let once = record("", "graph", "", Category::Section);
        assert_eq!(score(&spam, "graph"), score(&once, "graph"));
    }

    #[test]
    fn page_and_category_contribute_structural_weight() {
        let r = record("", "", "Installation", Category::Section);
        assert_eq!(score(&r, "installation"), Some(STRUCTURAL_WEIGHT));
        assert_eq!(score(&r, "section"), Some(STRUCTURAL_WEIGHT));
    }

    #[test]
    fn no_contribution_is_excluded_not_zero() {
        let r = record("Title", "text body", "Page", Category::Section);
        assert_eq!(score(&r, "unrelated"), None);
    }

    #[test]
    fn all_empty_record_never_matches() {
        let r = record("", "", "", Category::default());
        assert_eq!(score(&r, "anything"), None);
    }
}
