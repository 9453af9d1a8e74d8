//! Criterion benchmarks for arc sampling and vertex angles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use girard::angles::{planar_angle, spherical_angle};
use girard::geodesic::interpolate;
use girard::sample::uniform_points;
use girard::ARC_SEGMENTS;

fn bench_geodesic(c: &mut Criterion) {
    let pts = uniform_points(3, 45);
    let (a, b, d) = (pts[0], pts[1], pts[2]);
    c.bench_function("slerp_arc_31", |bch| {
        bch.iter(|| interpolate(black_box(a), black_box(b), ARC_SEGMENTS, 1e-9))
    });
    c.bench_function("spherical_angle", |bch| {
        bch.iter(|| spherical_angle(black_box(a), black_box(b), black_box(d), 1e-12))
    });
    c.bench_function("planar_angle", |bch| {
        bch.iter(|| planar_angle(black_box(a), black_box(b), black_box(d), 1e-12))
    });
}

criterion_group!(benches, bench_geodesic);
criterion_main!(benches);
