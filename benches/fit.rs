//! Benchmarks for the fit engine over the bundled fonts.
//!
//! Covers the three interesting paths: a whole-line fast path, word packing
//! across rows, and character splitting of an oversized word.

use criterion::{criterion_group, criterion_main, Criterion};
use largetty::{
    fit::{fit, FitRequest},
    FontCatalog,
};
use std::hint::black_box;

fn bench_fit(c: &mut Criterion) {
    let catalog = FontCatalog::builtin();
    let cases = [
        ("whole_line", "Hello", 80),
        (
            "word_packing",
            "The quick brown fox jumps over the lazy dog and keeps on running",
            72,
        ),
        ("char_splitting", "supercalifragilisticexpialidocious", 24),
    ];

    let mut group = c.benchmark_group("fit");
    for (name, text, width) in cases {
        let request = FitRequest::new(text, "big", width, 3);
        group.bench_function(name, |b| {
            b.iter(|| black_box(fit(&catalog, catalog.tiers(), black_box(&request))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
