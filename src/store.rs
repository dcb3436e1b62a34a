// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index store: parse the generator's payload once, hold the records
//! for the page session, expose them read-only.
//!
//! Parsing is deliberately two-faced. The *structure* of the payload is
//! checked strictly - anything that is not an object bearing a `docs`
//! sequence of location-carrying objects fails with [`MalformedIndex`] and
//! produces no partial index. The *fields* of each record are taken
//! tolerantly - an absent or non-string `page`, `title`, `text`, or
//! `category` defaults to empty instead of failing, because generator
//! output is never guaranteed complete across fields.
//!
//! Generators commonly deliver the index as a script, not a bare JSON file:
//!
//! ```text
//! var documenterSearchIndex = {"docs": [ ... ]}
//! ```
//!
//! [`IndexStore::load`] accepts both forms; the assignment wrapper is
//! stripped before JSON parsing.

use crate::types::{Category, IndexRecord};
use serde_json::Value;
use std::fmt;

/// Why a payload could not be loaded.
///
/// This is the only error this crate produces: structural failures are
/// detected once at load time, and [`search`](crate::search) is total over
/// anything that loaded. A host that sees this error should show an
/// explicit "search unavailable" state rather than an empty result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedIndex {
    /// The payload is not parseable JSON (after wrapper stripping).
    Syntax { reason: String },
    /// The top level is not an object.
    NotAnObject,
    /// The top-level object has no `docs` field.
    MissingDocs,
    /// `docs` is present but is not a sequence.
    DocsNotASequence,
    /// A `docs` entry is not an object.
    RecordNotAnObject { position: usize },
    /// A record has no string `location` field.
    MissingLocation { position: usize },
    /// A record's `location` is the empty string.
    EmptyLocation { position: usize },
}

impl fmt::Display for MalformedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedIndex::Syntax { reason } => {
                write!(f, "payload is not valid JSON: {}", reason)
            }
            MalformedIndex::NotAnObject => {
                write!(f, "payload root is not an object")
            }
            MalformedIndex::MissingDocs => {
                write!(f, "payload has no `docs` field")
            }
            MalformedIndex::DocsNotASequence => {
                write!(f, "`docs` is not a sequence")
            }
            MalformedIndex::RecordNotAnObject { position } => {
                write!(f, "docs[{}] is not an object", position)
            }
            MalformedIndex::MissingLocation { position } => {
                write!(f, "docs[{}] has no string `location`", position)
            }
            MalformedIndex::EmptyLocation { position } => {
                write!(f, "docs[{}] has an empty `location`", position)
            }
        }
    }
}

impl std::error::Error for MalformedIndex {}

/// The immutable record sequence for one page session.
///
/// Constructed once from the delivered payload, discarded with the session.
/// Records keep the generator's emission order; the query engine treats
/// that order as document structure, not relevance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStore {
    records: Vec<IndexRecord>,
}

impl IndexStore {
    /// Parse a payload into a store.
    ///
    /// Accepts raw JSON or the `var … = {...}` script form the generator
    /// emits. Fails with [`MalformedIndex`] when the payload is not a
    /// sequence of location-bearing objects; no partial index survives a
    /// failure. Absent optional fields default to empty strings.
    pub fn load(payload: &str) -> Result<Self, MalformedIndex> {
        let json = strip_assignment(payload);
        let value: Value = serde_json::from_str(json).map_err(|e| MalformedIndex::Syntax {
            reason: e.to_string(),
        })?;

        let Value::Object(mut root) = value else {
            return Err(MalformedIndex::NotAnObject);
        };
        let docs = root.remove("docs").ok_or(MalformedIndex::MissingDocs)?;
        let Value::Array(docs) = docs else {
            return Err(MalformedIndex::DocsNotASequence);
        };

        let mut records = Vec::with_capacity(docs.len());
        for (position, doc) in docs.into_iter().enumerate() {
            let Value::Object(fields) = doc else {
                return Err(MalformedIndex::RecordNotAnObject { position });
            };

            let location = match fields.get("location").and_then(Value::as_str) {
                Some(location) => location.to_string(),
                None => return Err(MalformedIndex::MissingLocation { position }),
            };
            if location.is_empty() {
                return Err(MalformedIndex::EmptyLocation { position });
            }

            records.push(IndexRecord {
                location,
                page: string_field(&fields, "page"),
                title: string_field(&fields, "title"),
                text: string_field(&fields, "text"),
                category: Category::from(string_field(&fields, "category")),
            });
        }

        Ok(IndexStore { records })
    }

    /// The full ordered record sequence, read-only.
    pub fn all(&self) -> &[IndexRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a IndexRecord;
    type IntoIter = std::slice::Iter<'a, IndexRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Read an optional string field, defaulting anything absent or non-string
/// to empty.
fn string_field(fields: &serde_json::Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Strip a `var name = {...};` script wrapper down to the JSON object.
///
/// A payload already starting with `{` passes through untouched. Otherwise
/// everything before the first `{` and after the last `}` is dropped; if
/// the payload has no braces at all it is left for the JSON parser to
/// reject with a syntax error.
fn strip_assignment(payload: &str) -> &str {
    let trimmed = payload.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"docs":[
        {"location":"guide/#install","page":"Guide","title":"Installation","text":"add it via the package manager","category":"section"},
        {"location":"api/","page":"API Reference","title":"","text":"","category":"page"}
    ]}"#;

    #[test]
    fn load_keeps_emission_order_and_fields() {
        let store = IndexStore::load(PAYLOAD).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].location, "guide/#install");
        assert_eq!(store.all()[0].title, "Installation");
        assert_eq!(store.all()[1].location, "api/");
        assert_eq!(store.all()[1].category, Category::Page);
    }

    #[test]
    fn load_accepts_script_wrapper() {
        let wrapped = format!("var documenterSearchIndex = {}\n", PAYLOAD);
        let store = IndexStore::load(&wrapped).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_defaults_absent_fields() {
        let store = IndexStore::load(r#"{"docs":[{"location":"x/"}]}"#).unwrap();
        let record = &store.all()[0];
        assert!(record.page.is_empty());
        assert!(record.title.is_empty());
        assert!(record.text.is_empty());
        assert_eq!(record.category, Category::default());
    }

    #[test]
    fn load_defaults_non_string_optional_fields() {
        let store =
            IndexStore::load(r#"{"docs":[{"location":"x/","title":7,"category":null}]}"#).unwrap();
        assert!(store.all()[0].title.is_empty());
        assert_eq!(store.all()[0].category, Category::default());
    }

    #[test]
    fn load_rejects_missing_docs() {
        assert_eq!(
            IndexStore::load(r#"{"nope": []}"#),
            Err(MalformedIndex::MissingDocs)
        );
    }

    #[test]
    fn load_rejects_non_sequence_docs() {
        assert_eq!(
            IndexStore::load(r#"{"docs": "oops"}"#),
            Err(MalformedIndex::DocsNotASequence)
        );
    }

    #[test]
    fn load_rejects_non_object_record() {
        assert_eq!(
            IndexStore::load(r#"{"docs":[{"location":"a/"}, 42]}"#),
            Err(MalformedIndex::RecordNotAnObject { position: 1 })
        );
    }

    #[test]
    fn load_rejects_missing_or_empty_location() {
        assert_eq!(
            IndexStore::load(r#"{"docs":[{"title":"no location"}]}"#),
            Err(MalformedIndex::MissingLocation { position: 0 })
        );
        assert_eq!(
            IndexStore::load(r#"{"docs":[{"location":""}]}"#),
            Err(MalformedIndex::EmptyLocation { position: 0 })
        );
    }

    #[test]
    fn load_rejects_non_object_root() {
        assert_eq!(IndexStore::load("[1,2,3]"), Err(MalformedIndex::NotAnObject));
        assert!(matches!(
            IndexStore::load("not json at all"),
            Err(MalformedIndex::Syntax { .. })
        ));
    }

    #[test]
    fn empty_docs_is_a_valid_empty_index() {
        let store = IndexStore::load(r#"{"docs":[]}"#).unwrap();
        assert!(store.is_empty());
    }
}
