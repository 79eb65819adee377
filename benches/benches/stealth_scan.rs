use ark_std::rand::{rngs::StdRng, SeedableRng};
use benches::{announcements, stealth_keys};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stealth_address::prelude::*;

fn generate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let meta = stealth_keys(&mut rng).meta_address();
    c.bench_function("Stealth address generation", |b| {
        b.iter(|| generate(&mut rng, black_box(&meta)).unwrap())
    });
}

fn scan_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let keys = stealth_keys(&mut rng);
    let counts = [10, 100, 1000];

    let mut sequential = c.benchmark_group("Scanning sequentially");
    let candidates = counts
        .iter()
        .map(|c| announcements(&mut rng, &keys, *c, 10))
        .collect::<Vec<_>>();
    for (i, count) in counts.iter().enumerate() {
        sequential.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| scan(black_box(&candidates[i]), black_box(&keys)).count())
        });
    }
    sequential.finish();

    let mut all = c.benchmark_group("Scanning all");
    for (i, count) in counts.iter().enumerate() {
        all.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| scan_all(black_box(&candidates[i]), black_box(&keys)))
        });
    }
    all.finish();
}

criterion_group!(benches, generate_benchmark, scan_benchmark);
criterion_main!(benches);
