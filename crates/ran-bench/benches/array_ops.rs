//! Criterion micro-benchmarks for growable array operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ran_array::{GrowableArray, Linear, Logarithmic};
use ran_bench::{filled, insert_positions, values};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Benchmark: push_back n values into an empty array, per growth policy.
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in SIZES {
        let data = values(n, 42);
        group.bench_with_input(BenchmarkId::new("linear", n), &data, |b, data| {
            b.iter(|| {
                let mut arr: GrowableArray<u64, Linear> = GrowableArray::new();
                for &v in data {
                    arr.push_back(v);
                }
                black_box(arr.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("logarithmic", n), &data, |b, data| {
            b.iter(|| {
                let mut arr: GrowableArray<u64, Logarithmic> = GrowableArray::new();
                for &v in data {
                    arr.push_back(v);
                }
                black_box(arr.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", n), &data, |b, data| {
            b.iter(|| {
                let mut arr: GrowableArray<u64, Linear> = GrowableArray::new();
                arr.reserve(data.len());
                for &v in data {
                    arr.push_back(v);
                }
                black_box(arr.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: n inserts at seeded random positions.
fn bench_insert(c: &mut Criterion) {
    let n = 1_000;
    let positions = insert_positions(n, 7);
    c.bench_function("insert_random_1k", |b| {
        b.iter(|| {
            let mut arr: GrowableArray<usize, Logarithmic> = GrowableArray::new();
            for (v, &pos) in positions.iter().enumerate() {
                arr.insert(pos, v);
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: drain a 1K array by erasing the front element.
fn bench_erase_front(c: &mut Criterion) {
    c.bench_function("erase_front_1k", |b| {
        b.iter_batched(
            || filled::<Logarithmic>(1_000),
            |mut arr| {
                while let Some(v) = arr.erase(0) {
                    black_box(v);
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: copy a 10K array into an empty one.
fn bench_copy_into(c: &mut Criterion) {
    let from = filled::<Linear>(10_000);
    c.bench_function("copy_into_10k", |b| {
        b.iter(|| {
            let mut to: GrowableArray<u64, Linear> = GrowableArray::new();
            from.copy_into(&mut to);
            black_box(to.capacity());
        });
    });
}

/// Benchmark: free a 10K array with an element destructor installed.
fn bench_free_with_destructor(c: &mut Criterion) {
    c.bench_function("free_with_destructor_10k", |b| {
        b.iter_batched(
            || {
                let mut arr = filled::<Logarithmic>(10_000);
                arr.set_element_destructor(|v: &mut u64| {
                    black_box(*v);
                });
                arr
            },
            |mut arr| arr.free(),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_insert,
    bench_erase_front,
    bench_copy_into,
    bench_free_with_destructor
);
criterion_main!(benches);
