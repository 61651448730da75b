//! Benchmarks for the camberline integrator hot loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;
use passage_camber::integrate;
use passage_types::{MeridionalGrid, ScalarField};

fn radial_grid(m_count: usize, s_count: usize) -> MeridionalGrid {
    let r = ScalarField::from_fn(m_count, s_count, |m, _| {
        1.0 + m as f64 / (m_count - 1) as f64
    });
    let z = ScalarField::from_fn(m_count, s_count, |_, s| s as f64 * 1e-3);
    MeridionalGrid::new(r, z).unwrap()
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for &(m, s) in &[(40, 20), (200, 50)] {
        let grid = radial_grid(m, s);
        let sampler = |r: f64, _z: f64| Vector3::new(5.0, 40.0 / r, 1.0);

        group.bench_function(format!("analytic_{m}x{s}"), |b| {
            b.iter(|| integrate(black_box(&grid), black_box(7330.0), &sampler));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integrate);
criterion_main!(benches);
