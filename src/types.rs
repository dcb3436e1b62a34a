// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search index.
//!
//! A documentation generator emits one [`IndexRecord`] per page or
//! sub-section. Records are plain data: the engine never mutates them, and
//! the whole sequence is replaced wholesale when the site is rebuilt.
//!
//! # Invariants
//!
//! - **IndexRecord**: `location` is never empty. It is the only field the
//!   payload schema guarantees; everything else may be an empty string.
//! - `location` is unique only as a full string - a page and its sub-anchors
//!   share a base path, so callers must not treat the path prefix as a key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of documentation unit a record represents.
///
/// The tag set is generator-defined and open-ended: the four variants below
/// are the ones every generator emits, and anything else (e.g. `macro`,
/// `constant`, `module`) lands in [`Category::Other`] without failing the
/// parse. Serialization round-trips the original tag string.
///
/// **Gotcha**: a derived `Ord` would be declaration order, which is not
/// the ranking order. Tie-breaking uses [`Category::specificity`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// A whole documentation page.
    Page,
    /// A section within a page.
    Section,
    /// A documented type.
    Type,
    /// A documented function or method.
    Function,
    /// Any tag this crate does not know about, kept verbatim.
    Other(String),
}

impl Category {
    /// The tag string as it appears in the payload.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Type => "type",
            Category::Function => "function",
            Category::Other(tag) => tag,
        }
    }

    /// How specific a unit of documentation this category names.
    ///
    /// Used as the first tie-break when two records score equally: a hit on
    /// a concrete function or type is a better answer than a hit on a whole
    /// page. Unknown tags rank below everything known.
    pub fn specificity(&self) -> u8 {
        match self {
            Category::Function | Category::Type => 3,
            Category::Section => 2,
            Category::Page => 1,
            Category::Other(_) => 0,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "page" => Category::Page,
            "section" => Category::Section,
            "type" => Category::Type,
            "function" => Category::Function,
            _ => Category::Other(tag),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// One searchable unit: a documentation page or sub-section.
///
/// Everything except `location` defaults to empty, because generator output
/// is never guaranteed complete across fields. An all-empty record (apart
/// from `location`) is legal - it simply never matches a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Navigable target: URL path plus optional in-page anchor.
    pub location: String,
    /// Human-readable page name; empty for index/overview entries.
    #[serde(default)]
    pub page: String,
    /// Section title; may be empty.
    #[serde(default)]
    pub title: String,
    /// Body excerpt, possibly embedding the page's code as a flat string.
    #[serde(default)]
    pub text: String,
    /// What kind of unit this record represents.
    #[serde(default)]
    pub category: Category,
}

impl IndexRecord {
    /// The string a result list should display: `title`, falling back to
    /// `page` when the title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.page
        } else {
            &self.title
        }
    }
}

/// A record paired with its relevance score for one query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    /// The matched record.
    pub record: IndexRecord,
    /// Non-negative relevance; results are ordered by non-increasing score.
    pub score: f64,
}
