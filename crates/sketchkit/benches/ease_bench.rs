//! Criterion benchmarks for easing evaluation over a dense sample grid.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketchkit::ease::Easing;

fn bench_ease(c: &mut Criterion) {
    let mut group = c.benchmark_group("ease");
    let xs: Vec<f64> = (0..=1000).map(|i| i as f64 / 1000.0).collect();
    for e in Easing::all() {
        group.bench_function(e.to_string(), |b| {
            b.iter(|| xs.iter().map(|&x| e.apply(black_box(x))).sum::<f64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ease);
criterion_main!(benches);
