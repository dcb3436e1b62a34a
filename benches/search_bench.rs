//! Benchmarks over synthetic documentation sites.
//!
//! Simulates realistic index sizes:
//! - Small site:  ~30 pages, a handful of sections each (library docs)
//! - Medium site: ~150 pages (framework docs)
//! - Large site:  ~600 pages (monorepo API reference)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use talpa::{search, Category, IndexRecord, IndexStore, PreparedIndex};

/// Site size configurations matching real-world documentation builds.
struct SiteSize {
    name: &'static str,
    pages: usize,
    sections_per_page: usize,
}

const SITE_SIZES: &[SiteSize] = &[
    SiteSize {
        name: "small",
        pages: 30,
        sections_per_page: 4,
    },
    SiteSize {
        name: "medium",
        pages: 150,
        sections_per_page: 5,
    },
    SiteSize {
        name: "large",
        pages: 600,
        sections_per_page: 6,
    },
];

/// Technical vocabulary for plausible section text.
const WORDS: &[&str] = &[
    "graph", "kernel", "matrix", "random", "walk", "product", "vertex", "edge", "label",
    "molecule", "compare", "compute", "install", "configure", "example", "reference", "tutorial",
    "function", "method", "iterator", "normalize", "token", "index", "search", "result",
];

fn section_text(seed: usize, words: usize) -> String {
    (0..words)
        .map(|i| WORDS[(seed * 7 + i * 3) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_corpus(size: &SiteSize) -> Vec<IndexRecord> {
    let mut records = Vec::new();
    for page in 0..size.pages {
        let page_name = format!("{} guide {}", WORDS[page % WORDS.len()], page);
        records.push(IndexRecord {
            location: format!("page{}/", page),
            page: page_name.clone(),
            title: page_name.clone(),
            text: String::new(),
            category: Category::Page,
        });
        for section in 0..size.sections_per_page {
            records.push(IndexRecord {
                location: format!("page{}/#section{}", page, section),
                page: page_name.clone(),
                title: format!("{} {}", WORDS[(page + section) % WORDS.len()], section),
                text: section_text(page + section, 60),
                category: if section % 3 == 0 {
                    Category::Function
                } else {
                    Category::Section
                },
            });
        }
    }
    records
}

/// Queries a documentation reader actually types.
const QUERIES: &[&str] = &["graph", "random walk", "install", "kernel matrix product"];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in SITE_SIZES {
        let corpus = build_corpus(size);
        group.throughput(Throughput::Elements(corpus.len() as u64));
        for query in QUERIES {
            group.bench_with_input(
                BenchmarkId::new(size.name, query.replace(' ', "-")),
                &corpus,
                |b, corpus| b.iter(|| search(black_box(corpus), black_box(query), 10)),
            );
        }
    }
    group.finish();
}

fn bench_prepared_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepared");
    for size in SITE_SIZES {
        let corpus = build_corpus(size);
        let payload =
            serde_json::to_string(&serde_json::json!({ "docs": &corpus })).unwrap();
        let prepared = PreparedIndex::new(IndexStore::load(&payload).unwrap());
        group.throughput(Throughput::Elements(corpus.len() as u64));
        group.bench_with_input(BenchmarkId::new(size.name, "graph"), &prepared, |b, prepared| {
            b.iter(|| prepared.search(black_box("graph"), 10))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for size in SITE_SIZES {
        let corpus = build_corpus(size);
        let payload =
            serde_json::to_string(&serde_json::json!({ "docs": &corpus })).unwrap();
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &payload, |b, payload| {
            b.iter(|| IndexStore::load(black_box(payload)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_prepared_index, bench_load);
criterion_main!(benches);
