use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use nalgebra::Vector2;
use honeycomb_symmetry::geometries::{reflect_tilted, Boundary};
use honeycomb_symmetry::lattice::honeycomb_lattice;
use honeycomb_symmetry::symmetries::vertical_reflection_axis;

/// Simple benchmark to verify the basic setup works
fn bench_quick_symmetry_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_symmetry_test");

    let boundary = Boundary::new(-0.25, 2.25, -0.5, 1.5);
    let tile = honeycomb_lattice(1, 1);

    group.bench_function("reflect_tilted_point", |b| {
        b.iter(|| {
            reflect_tilted(
                black_box(Vector2::new(1.5, 0.8660254037844386)),
                black_box(Vector2::new(1.0, 1.0)),
                black_box(Vector2::new(1.0, 0.0)),
                black_box(&boundary),
            )
        });
    });

    group.bench_function("1x1_lattice_creation", |b| {
        b.iter(|| {
            let _lattice = honeycomb_lattice(black_box(1), black_box(1));
        });
    });

    group.bench_function("1x1_vertical_sweep", |b| {
        b.iter(|| {
            vertical_reflection_axis(black_box(&tile), black_box(&boundary))
        });
    });

    group.finish();
}

criterion_group!(quick_benches, bench_quick_symmetry_test);
criterion_main!(quick_benches);
