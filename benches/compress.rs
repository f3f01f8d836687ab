//! Compression throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokenshrink::{
    codec::{decompress, detect_strategy, find_repeated_phrases},
    CompressOptions, ShrinkEngine,
};

const PARAGRAPH: &str = "In order to keep the deployment reliable, it is important to test this carefully. \
    The function reads the configuration from the database and consequently returns the result. \
    Due to the fact that the pipeline is scalable, the stakeholder review happens every quarter. ";

fn document(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn bench_compress(c: &mut Criterion) {
    let engine = ShrinkEngine::new();
    let options = CompressOptions::default();
    let mut group = c.benchmark_group("compress");

    for paragraphs in [4, 32, 256] {
        let text = document(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| engine.compress(black_box(text), &options));
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let text = document(32);
    let compressed = ShrinkEngine::new()
        .compress(&text, &CompressOptions::default())
        .map(|r| r.compressed)
        .unwrap_or_default();

    c.bench_function("detect_strategy", |b| b.iter(|| detect_strategy(black_box(&text))));
    c.bench_function("find_repeated_phrases", |b| {
        b.iter(|| find_repeated_phrases(black_box(&text), 3, 2));
    });
    c.bench_function("decompress", |b| b.iter(|| decompress(black_box(&compressed))));
}

criterion_group!(benches, bench_compress, bench_phases);
criterion_main!(benches);
