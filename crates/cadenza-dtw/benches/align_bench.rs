//! Criterion benchmarks for cadenza-dtw: pairwise alignment and index lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cadenza_dtw::{Aligner, BufferSignal, CatalogEntry, ReferenceIndex};

fn make_sine_signal(frames: usize, offset: f64) -> BufferSignal {
    let samples: Vec<f64> = (0..frames).map(|i| (i as f64 * 0.1).sin() + offset).collect();
    BufferSignal::new(samples, 16_000).unwrap()
}

fn bench_compute(c: &mut Criterion) {
    let lengths = [64usize, 256, 1024];
    let aligner = Aligner::new();

    let mut group = c.benchmark_group("aligner_compute");

    for &len in &lengths {
        let x = make_sine_signal(len, 0.0);
        let y = make_sine_signal(len, 1.0);

        group.bench_with_input(BenchmarkId::from_parameter(len), &(x, y), |b, (x, y)| {
            b.iter(|| aligner.compute(x, y).unwrap());
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let entries: Vec<CatalogEntry<BufferSignal>> = (0..50)
        .map(|i| CatalogEntry::new(format!("ref{i}"), make_sine_signal(128, i as f64 * 0.2)))
        .collect();
    let index = ReferenceIndex::new(entries);
    let query = make_sine_signal(128, 5.0);

    c.bench_function("index_lookup_50x128", |b| {
        b.iter(|| index.lookup(&query).unwrap());
    });
}

criterion_group!(benches, bench_compute, bench_lookup);
criterion_main!(benches);
