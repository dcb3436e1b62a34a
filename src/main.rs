use clap::Parser;
use std::fs;
use std::process;

use talpa::{dedup_by_location, search, IndexStore};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            merge,
            json,
        } => run_search(&file, &query, limit, merge, json),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(message) = result {
        eprintln!("error: {}", message);
        process::exit(1);
    }
}

/// Load an index file, surfacing both I/O and payload failures as one
/// message. A load failure means "search unavailable", never an empty
/// index.
fn load_store(file: &str) -> Result<IndexStore, String> {
    let payload =
        fs::read_to_string(file).map_err(|e| format!("cannot read {}: {}", file, e))?;
    IndexStore::load(&payload).map_err(|e| format!("cannot load {}: {}", file, e))
}

fn run_search(
    file: &str,
    query: &str,
    limit: usize,
    merge: bool,
    json: bool,
) -> Result<(), String> {
    let store = load_store(file)?;

    let mut results = search(store.all(), query, limit);
    if merge {
        results = dedup_by_location(results);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("cannot serialize results: {}", e))?;
        println!("{}", rendered);
    } else {
        display::print_results(query, &results);
    }
    Ok(())
}

fn run_inspect(file: &str) -> Result<(), String> {
    let store = load_store(file)?;
    display::print_inspect(&store);
    Ok(())
}
