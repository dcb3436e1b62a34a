//! Client-side search for static documentation sites.
//!
//! A documentation generator emits a search index - an ordered sequence of
//! page/section records - and a browser widget answers free-text queries
//! against it without a server round-trip. This crate is that index's data
//! model and the matching/ranking engine that consumes it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   types.rs  │────▶│   store.rs   │────▶│  search.rs   │
//! │ (IndexRecord│     │ (IndexStore, │     │ (search,     │
//! │   Category) │     │   load/all)  │     │ PreparedIndex│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  scoring.rs  │
//!                                          │ (weights,    │
//!                                          │ score_record)│
//!                                          └──────────────┘
//! ```
//!
//! The index is loaded once per page view and held immutable for the
//! session; a site rebuild replaces it wholesale. [`search`] is a pure
//! function of `(records, query, limit)` - call it on every keystroke.
//!
//! # Usage
//!
//! ```
//! use talpa::{IndexStore, search};
//!
//! let store = IndexStore::load(r#"{"docs": [
//!     {"location": "kernels/#graph", "page": "Kernels", "title": "Graph Kernels",
//!      "text": "compare two graphs", "category": "section"}
//! ]}"#).unwrap();
//!
//! let results = search(store.all(), "graph", 10);
//! assert_eq!(results[0].record.location, "kernels/#graph");
//! ```

// Module declarations
mod scoring;
mod search;
mod store;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use scoring::{
    score_record, RecordTokens, STRUCTURAL_WEIGHT, TEXT_WEIGHT, TITLE_EXACT_WEIGHT,
    TITLE_SUBSTRING_WEIGHT,
};
pub use search::{dedup_by_location, search, PreparedIndex};
pub use store::{IndexStore, MalformedIndex};
pub use types::{Category, IndexRecord, ScoredRecord};
pub use utils::{excerpt, normalize, tokenize};

#[cfg(feature = "wasm")]
pub use wasm::DocIndex;
