//! Criterion benchmarks for the task heap.
//!
//! Uses uniformly random priorities and durations so that scores spread
//! across a wide range with plenty of ties.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_taskqueue::heap::{HeapConfig, PriorityHeap, RemovalMode};

fn random_entries(n: usize) -> Vec<(usize, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            (
                i,
                rng.random_range(-1000.0..1000.0),
                rng.random_range(0.5..20.0),
            )
        })
        .collect()
}

fn filled(entries: &[(usize, f64, f64)], config: HeapConfig) -> PriorityHeap<usize> {
    let mut heap = PriorityHeap::with_config(config);
    for &(label, p, d) in entries {
        heap.insert(label, p, d).unwrap();
    }
    heap
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &[100, 1_000, 10_000] {
        let entries = random_entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &entries, |b, e| {
            b.iter(|| black_box(filled(black_box(e), HeapConfig::default())))
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_drain");

    for &n in &[100, 1_000, 10_000] {
        let entries = random_entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &entries, |b, e| {
            b.iter(|| {
                let mut heap = filled(black_box(e), HeapConfig::default());
                while let Some(label) = heap.pop() {
                    black_box(label);
                }
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    group.sample_size(20);

    for (name, mode) in [("repair", RemovalMode::Repair), ("splice", RemovalMode::Splice)] {
        let entries = random_entries(2_000);
        let config = HeapConfig::default().with_removal(mode);
        group.bench_with_input(BenchmarkId::new(name, 2_000), &entries, |b, e| {
            b.iter(|| {
                let mut heap = filled(e, config);
                for label in (0..e.len()).step_by(2) {
                    black_box(heap.remove(&label));
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_remove);
criterion_main!(benches);
