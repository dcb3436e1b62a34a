// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser search widget.
//!
//! One class, [`DocIndex`]: construct it once per page view from the
//! delivered payload, call `search` on every input event. A constructor
//! failure is how the host learns to show its "search unavailable" state -
//! a constructed index never fails a query.

use crate::search::{dedup_by_location, PreparedIndex};
use crate::store::IndexStore;
use crate::utils::{excerpt, tokenize};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Snippet width handed to the widget; it truncates further as it likes.
const SNIPPET_CHARS: usize = 140;

/// Search options passed from JavaScript.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 10, 0 = everything)
    pub limit: usize,
    /// Collapse results sharing a location to the best one (default: true)
    pub merge: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            merge: true,
        }
    }
}

/// Search result output for the widget.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput {
    location: String,
    title: String,
    page: String,
    category: String,
    snippet: String,
    score: f64,
}

/// WASM-accessible search index for one page session.
#[wasm_bindgen]
pub struct DocIndex {
    prepared: PreparedIndex,
}

#[wasm_bindgen]
impl DocIndex {
    /// Parse the generator's payload (raw JSON or the `var … = {...}`
    /// script form). Throws with the malformed-index message on failure;
    /// no partial index is produced.
    #[wasm_bindgen(constructor)]
    pub fn new(payload: &str) -> Result<DocIndex, JsValue> {
        let store =
            IndexStore::load(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(DocIndex {
            prepared: PreparedIndex::new(store),
        })
    }

    /// Ranked results for a free-text query.
    ///
    /// `options` may be `undefined` or `{ limit, merge }`. Returns an array
    /// of `{ location, title, page, category, snippet, score }`, best
    /// first; `title` already falls back to the page name.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let mut results = self.prepared.search(query, options.limit);
        if options.merge {
            results = dedup_by_location(results);
        }

        let tokens = tokenize(query);
        let output: Vec<SearchResultOutput> = results
            .into_iter()
            .map(|hit| SearchResultOutput {
                location: hit.record.location.clone(),
                title: hit.record.display_title().to_string(),
                page: hit.record.page.clone(),
                category: hit.record.category.to_string(),
                snippet: excerpt(&hit.record.text, &tokens, SNIPPET_CHARS),
                score: hit.score,
            })
            .collect();

        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of records in the loaded index.
    #[wasm_bindgen(js_name = recordCount)]
    pub fn record_count(&self) -> usize {
        self.prepared.store().len()
    }
}
