//! Criterion microbenches for the DTW solver (cost-only vs. full path).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gearshape::api::{dtw, dtw_cost};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect()
}

fn bench_dtw(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtw");
    for &n in &[64usize, 128, 256] {
        let grid = random_grid(n, 43);
        group.bench_with_input(BenchmarkId::new("dtw_cost", n), &n, |b, &n| {
            b.iter(|| dtw_cost((n, n), |i, j| grid[i * n + j]))
        });
        group.bench_with_input(BenchmarkId::new("dtw_path", n), &n, |b, &n| {
            b.iter(|| dtw((n, n), |i, j| grid[i * n + j]))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dtw);
criterion_main!(benches);
