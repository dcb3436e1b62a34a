// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talpa command-line interface.
//!
//! Two subcommands: `search` to query an index file the way the browser
//! widget would, and `inspect` to examine what a generator actually put in
//! the file. Both accept the raw JSON payload or the `var … = {...}` script
//! form sites ship.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Query and inspect static documentation search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display ranked results
    Search {
        /// Path to the search index (search_index.js or plain JSON)
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return (0 = everything)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Keep only the best result per location
        #[arg(long)]
        merge: bool,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show what an index file contains
    Inspect {
        /// Path to the search index (search_index.js or plain JSON)
        file: String,
    },
}
