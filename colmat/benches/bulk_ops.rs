//! Benchmarks for whole-matrix bulk operations.
//!
//! Measures:
//! - `fill`: overwrite every element
//! - scalar scale via `Mul`
//! - `cast`: whole-matrix converting copy (f64 -> f32)

use colmat::ColMajorMatrix;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const DIMS: &[(usize, usize)] = &[(64, 64), (512, 512), (2048, 2048)];

fn bulk_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_ops");

    for &(rows, cols) in DIMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let m = ColMajorMatrix::<f64>::rand(&mut rng, rows, cols);
        let param = format!("{rows}x{cols}");

        group.bench_with_input(BenchmarkId::new("fill", &param), &(), |b, _| {
            b.iter_batched(
                || m.clone(),
                |mut m| {
                    m.fill(1.0);
                    m
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("scale", &param), &(), |b, _| {
            b.iter_batched(|| m.clone(), |m| m * 3.0, BatchSize::SmallInput);
        });

        group.bench_with_input(BenchmarkId::new("cast_f64_to_f32", &param), &(), |b, _| {
            b.iter(|| m.cast::<f32>());
        });
    }

    group.finish();
}

criterion_group!(benches, bulk_ops);
criterion_main!(benches);
