//! Benchmark for merging pair sequences.
//!
//! Compares the built-in strategies on half-overlapping sources.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dualmap::extensions::strategy;
use dualmap::{DictionaryMap, merge};
use std::hint::black_box;

fn sources(size: i32) -> (DictionaryMap<i32, i32>, DictionaryMap<i32, i32>) {
    let left = (0..size).map(|index| (index, index)).collect();
    let right = (size / 2..size + size / 2).map(|index| (index, -index)).collect();
    (left, right)
}

fn benchmark_merge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge");

    for size in [100, 1_000, 10_000] {
        let (left, right) = sources(size);

        group.bench_with_input(BenchmarkId::new("first", size), &size, |bencher, _| {
            bencher.iter(|| black_box(merge(&left, &right, strategy::first())));
        });

        group.bench_with_input(BenchmarkId::new("last", size), &size, |bencher, _| {
            bencher.iter(|| black_box(merge(&left, &right, strategy::last())));
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(merge(
                    left.iter().map(|(&key, &value)| (key, value)),
                    right.iter().map(|(&key, &value)| (key, value)),
                    strategy::reduce(|accumulator: i32, value: i32| accumulator + value),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_merge);
criterion_main!(benches);
