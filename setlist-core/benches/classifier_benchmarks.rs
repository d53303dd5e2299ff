//! Performance benchmarks for classification and transcript scanning
//!
//! Run with: cargo bench --bench classifier_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use setlist_core::{classify, RuleTables, TranscriptScanner};
use std::hint::black_box;

const SENTENCES: &[&str] = &[
    "Here is the set list for tonight.",
    "He wants to set up the stage.",
    "She brought her drum set.",
    "We went with a good set for the encore.",
    "The setlist changed every night.",
    "I found an old cassette in the van.",
    "Nothing about music in this one.",
];

/// Generate transcript text of specified size
fn generate_transcript(size: usize) -> String {
    let base = SENTENCES.join(" ") + " ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Benchmark single-sentence classification per rule path
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let rules = RuleTables::default();

    for (i, sentence) in SENTENCES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("sentence", i), sentence, |b, s| {
            b.iter(|| classify(black_box(s), &rules));
        });
    }

    group.finish();
}

/// Benchmark full transcript scans of different sizes
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let scanner = TranscriptScanner::default();

    for size in [1024, 10_240, 102_400] {
        let text = generate_transcript(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("scan", size), &text, |b, text| {
            b.iter(|| scanner.scan(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_scan);
criterion_main!(benches);
