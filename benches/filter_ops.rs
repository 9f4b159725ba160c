//! Criterion benchmarks for insert and contains.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use universal_bloom::BloomFilter;

fn bench_insert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut filter = BloomFilter::with_rng(10_000, 0.001, &mut rng).unwrap();
    let mut key = 0u64;

    c.bench_function("insert", |b| {
        b.iter(|| {
            key = key.wrapping_add(0x9e3779b97f4a7c15);
            filter.insert(black_box(key));
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut filter = BloomFilter::with_rng(10_000, 0.001, &mut rng).unwrap();
    for key in 0..10_000u64 {
        filter.insert(key);
    }

    let mut key = 0u64;
    c.bench_function("contains", |b| {
        b.iter(|| {
            key = key.wrapping_add(0x9e3779b97f4a7c15);
            black_box(filter.contains(black_box(key)))
        })
    });
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
