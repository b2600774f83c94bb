//! Criterion benchmarks for the rating pipeline.
//! Focus sizes: N in {32, 64, 128}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gearshape::api::{
    build_distance_matrix, build_tar, draw_contour_radial, shape_difference_rating,
    AlignmentStrategy, RadialCfg, ReplayToken, StdShape, VertexCount,
};
use nalgebra::Vector2;

fn random_contour(index: u64) -> gearshape::Contour {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 12, max: 40 },
        ..RadialCfg::default()
    };
    draw_contour_radial(cfg, ReplayToken { seed: 2025, index }).unwrap()
}

fn bench_descriptor(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor");
    let target = StdShape::FocalEllipse.contour(256, Vector2::zeros()).unwrap();
    for &n in &[32usize, 64, 128] {
        group.bench_with_input(BenchmarkId::new("build_tar", n), &n, |b, &n| {
            b.iter(|| build_tar(&target, n).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("distance_matrix", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    (
                        build_tar(&target, n).unwrap(),
                        build_tar(&random_contour(n as u64), n).unwrap(),
                    )
                },
                |(ta, tb)| build_distance_matrix(&ta, &tb).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rating(c: &mut Criterion) {
    let mut group = c.benchmark_group("rating");
    group.sample_size(10);
    let target = StdShape::Ellipse.contour(128, Vector2::zeros()).unwrap();
    for &n in &[32usize, 64, 128] {
        for strategy in AlignmentStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |b, &n| {
                let candidate = random_contour(7);
                b.iter(|| shape_difference_rating(&target, &candidate, Some(n), strategy).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_descriptor, bench_rating);
criterion_main!(benches);
