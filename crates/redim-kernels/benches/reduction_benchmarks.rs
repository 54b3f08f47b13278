//! Performance benchmarks for redim-kernels
//!
//! Run with: cargo bench -p redim-kernels
//!
//! Benchmarks cover:
//! - Trailing-dimension reductions on the contiguous fast path vs the general path
//! - Leading-dimension reductions (direct accumulation)
//! - Weighted sums with and without the matrix-vector substitute
//! - Extremum search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use redim_kernels::*;
use scirs2_core::ndarray_ext::{Array, IxDyn};

fn matrix(rows: usize, cols: usize) -> Array<f64, IxDyn> {
    Array::from_shape_fn(IxDyn(&[rows, cols]), |idx| {
        ((idx[0] * 31 + idx[1] * 7) % 101) as f64 * 0.01
    })
}

fn bench_sum_trailing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_trailing");

    for &size in [64, 256, 1024].iter() {
        let a = matrix(size, size);
        let dims = DimensionSet::single(2).unwrap();
        group.throughput(Throughput::Elements((size * size) as u64));

        for (label, config) in [
            ("fast", KernelConfig::default()),
            ("general", KernelConfig::general_only()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}x{}", size, size)),
                &size,
                |bencher, _| {
                    bencher.iter(|| {
                        let view = a.view();
                        let mut r = init_accumulator(&Identity, &Add, &view, &dims, None).unwrap();
                        mapreducedim_into_with_config(&Identity, &Add, &mut r.view_mut(), &view, &config)
                            .unwrap();
                        black_box(r);
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_sum_leading(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_leading");

    for &size in [64, 256, 1024].iter() {
        let a = matrix(size, size);
        let dims = DimensionSet::single(1).unwrap();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("direct", format!("{}x{}", size, size)),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut r = init_accumulator(&Identity, &Add, &a.view(), &dims, None).unwrap();
                    mapreducedim_into(&Identity, &Add, &mut r.view_mut(), &a.view()).unwrap();
                    black_box(r);
                });
            },
        );
    }
    group.finish();
}

fn bench_weighted_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sum");

    for &size in [64, 256, 1024].iter() {
        let a = matrix(size, size);
        let w: Vec<f64> = (0..size).map(|i| 1.0 / (1.0 + i as f64)).collect();
        let dims = DimensionSet::single(2).unwrap();
        group.throughput(Throughput::Elements((size * size) as u64));

        for (label, config) in [
            ("accelerated", KernelConfig::default()),
            ("general", KernelConfig::general_only()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}x{}", size, size)),
                &size,
                |bencher, _| {
                    bencher.iter(|| {
                        black_box(weighted_sum_with_config(&a.view(), &w, &dims, &config).unwrap());
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_find_extremum(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_extremum");

    for &size in [64, 256, 1024].iter() {
        let a = matrix(size, size);
        let dims = DimensionSet::single(2).unwrap();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("findmax", format!("{}x{}", size, size)),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    black_box(find_extremum(Comparator::Greater, &a.view(), &dims).unwrap());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sum_trailing,
    bench_sum_leading,
    bench_weighted_sum,
    bench_find_extremum
);
criterion_main!(benches);
