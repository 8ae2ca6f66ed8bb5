//! Benchmark for `List` traversal against `Vec`.
//!
//! `map`, `flat_map` and the folds run over long lists; these paths are
//! iterative, so the interesting number is per-element cost rather than
//! stack depth.

use adtkit::adt::{List, cons, nil};
use adtkit::algebra::{ListConcat, combine_all};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn build(size: usize) -> List<usize> {
    (0..size).collect()
}

// =============================================================================
// cons Benchmark
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = nil();
                for index in 0..size {
                    list = cons(black_box(index), list);
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

// =============================================================================
// map Benchmark
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in SIZES {
        let list = build(size);
        let vector: Vec<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.clone().map(|x| x * 2)));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| black_box(vector.iter().map(|x| x * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in SIZES {
        let list = build(size);

        group.bench_with_input(BenchmarkId::new("List", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.clone().flat_map(|x| cons(x, cons(x + 1, nil())))));
        });
    }

    group.finish();
}

// =============================================================================
// fold Benchmark
// =============================================================================

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in SIZES {
        let list = build(size);

        group.bench_with_input(BenchmarkId::new("fold_left", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.fold_left(0_usize, |sum, x| sum + x)));
        });

        group.bench_with_input(BenchmarkId::new("fold_right", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.fold_right(0_usize, |x, sum| sum + x)));
        });
    }

    group.finish();
}

// =============================================================================
// combine_all Benchmark
// =============================================================================

fn benchmark_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combine_all");

    for size in SIZES {
        let chunks: Vec<List<usize>> = (0..size / 10).map(|start| build(start % 10)).collect();

        group.bench_with_input(BenchmarkId::new("ListConcat", size), &chunks, |bencher, chunks| {
            bencher.iter(|| black_box(combine_all(&ListConcat::new(), chunks.iter().cloned())));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_cons,
    benchmark_map,
    benchmark_flat_map,
    benchmark_fold,
    benchmark_concat
);

criterion_main!(benches);
