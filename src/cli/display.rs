// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for search results and index inspection.
//!
//! Plain ANSI colors, gated on the output being a TTY. Respects `NO_COLOR`
//! for the purists and pipelines. Nothing here is load-bearing: `--json`
//! bypasses this module entirely.

use std::collections::BTreeMap;

use talpa::{excerpt, tokenize, IndexStore, ScoredRecord};

/// Width of the text snippet shown under each result.
const SNIPPET_CHARS: usize = 96;

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Whether stdout should get ANSI colors.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(text: &str, color: &str) -> String {
    if use_color() {
        format!("{}{}{}", color, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Render ranked results the way the site widget would: display title,
/// category badge, location, and a snippet of the matched text.
pub fn print_results(query: &str, results: &[ScoredRecord]) {
    if results.is_empty() {
        println!("no results for {:?}", query);
        return;
    }

    let tokens = tokenize(query);
    for (rank, hit) in results.iter().enumerate() {
        let record = &hit.record;
        let title = if record.display_title().is_empty() {
            record.location.as_str()
        } else {
            record.display_title()
        };

        println!(
            "{:>3}. {} {} {}",
            rank + 1,
            paint(title, &format!("{}{}", colors::BOLD, colors::CYAN)),
            paint(&format!("[{}]", record.category), colors::YELLOW),
            paint(&format!("({:.1})", hit.score), colors::DIM),
        );
        println!("     {}", paint(&record.location, colors::GREEN));

        let snippet = excerpt(&record.text, &tokens, SNIPPET_CHARS);
        if !snippet.is_empty() {
            println!("     {}", paint(&snippet, colors::DIM));
        }
    }
}

/// Render what an index file holds: totals, category breakdown, pages.
pub fn print_inspect(store: &IndexStore) {
    println!("records: {}", store.len());

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut pages: BTreeMap<String, usize> = BTreeMap::new();
    for record in store {
        let tag = record.category.as_str();
        let tag = if tag.is_empty() { "(untagged)" } else { tag };
        *by_category.entry(tag.to_string()).or_insert(0) += 1;
        if !record.page.is_empty() {
            *pages.entry(record.page.clone()).or_insert(0) += 1;
        }
    }

    println!("\n{}", paint("categories", colors::BOLD));
    for (tag, count) in &by_category {
        println!("  {:<12} {}", tag, count);
    }

    println!("\n{}", paint("pages", colors::BOLD));
    for (page, count) in &pages {
        println!("  {:<32} {} record(s)", page, count);
    }
}
