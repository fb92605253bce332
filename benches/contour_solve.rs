use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use goatherd::batch::solve_parallel;
use goatherd::contour::solve;

/// Uniform random mean anomalies in [0, 2π)
#[inline]
fn random_batch(rng: &mut StdRng, len: usize) -> Vec<f64> {
    let two_pi = std::f64::consts::TAU;
    (0..len).map(|_| rng.random::<f64>() * two_pi).collect()
}

/// Typical regime: e = 0.5, n_it = 10
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("contour_solve/typical_e=0.5", |b| {
        b.iter_batched(
            || random_batch(&mut rng, samples),
            |ell| {
                let est = solve(black_box(&ell), black_box(0.5), black_box(10)).unwrap();
                black_box(est);
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e = 0.9
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("contour_solve/high_e=0.9", |b| {
        b.iter_batched(
            || random_batch(&mut rng, samples),
            |ell| {
                let est = solve(black_box(&ell), black_box(0.9), black_box(10)).unwrap();
                black_box(est);
            },
            BatchSize::LargeInput,
        )
    });
}

/// Cost scaling with the number of sampling points
fn bench_sampling_points(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;
    let mut group = c.benchmark_group("contour_solve/sampling_points");

    for n_it in [4usize, 10, 20, 40] {
        group.bench_function(format!("n_it={n_it}"), |b| {
            b.iter_batched(
                || random_batch(&mut rng, samples),
                |ell| {
                    let est = solve(black_box(&ell), black_box(0.5), black_box(n_it)).unwrap();
                    black_box(est);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

/// Chunk-parallel path on a driver-sized batch
fn bench_parallel(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFEBABE);
    let samples = 1_000_000usize;

    c.bench_function("contour_solve/parallel_1e6", |b| {
        b.iter_batched(
            || random_batch(&mut rng, samples),
            |ell| {
                let est = solve_parallel(black_box(&ell), black_box(0.5), black_box(10)).unwrap();
                black_box(est);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e, bench_sampling_points, bench_parallel
);
criterion_main!(benches);
