//! Benchmark for SynchronizedDictionary sync passes.
//!
//! Measures flatten, reload and duplicate detection against record lists of
//! increasing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dualmap::{Entry, SynchronizedDictionary};
use std::hint::black_box;

fn populated(size: i32) -> SynchronizedDictionary<i32, i32> {
    (0..size).map(|index| (index, index * 2)).collect()
}

// =============================================================================
// flatten Benchmark
// =============================================================================

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for size in [100, 1_000, 10_000] {
        let dictionary = populated(size);

        group.bench_with_input(
            BenchmarkId::new("unique", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut dictionary = dictionary.clone();
                    black_box(dictionary.flatten())
                });
            },
        );

        let mut duplicated = dictionary.clone();
        duplicated.flatten();
        duplicated.records_mut().push(Entry::new(0, 0));

        group.bench_with_input(
            BenchmarkId::new("skipped", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut dictionary = duplicated.clone();
                    black_box(dictionary.flatten())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// reload Benchmark
// =============================================================================

fn benchmark_reload(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reload");

    for size in [100, 1_000, 10_000] {
        let mut dictionary = populated(size);
        dictionary.flatten();

        group.bench_with_input(
            BenchmarkId::new("SynchronizedDictionary", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut dictionary = dictionary.clone();
                    black_box(dictionary.reload())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// duplicate_keys Benchmark
// =============================================================================

fn benchmark_duplicate_keys(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("duplicate_keys");

    for size in [100, 1_000, 10_000] {
        let mut dictionary = populated(size);
        dictionary.flatten();
        dictionary.records_mut().push(Entry::new(size / 2, 0));

        group.bench_with_input(BenchmarkId::new("find", size), &size, |bencher, _| {
            bencher.iter(|| black_box(dictionary.duplicate_keys().len()));
        });

        group.bench_with_input(BenchmarkId::new("any", size), &size, |bencher, _| {
            bencher.iter(|| black_box(dictionary.has_duplicate_keys()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_reload,
    benchmark_duplicate_keys
);
criterion_main!(benches);
