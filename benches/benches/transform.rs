// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for transform application fast paths.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parterre_geom::{Point, Vec2};
use parterre_transform::Transform;

fn sample_points() -> Vec<Point> {
    (0..1024).map(|i| Point::new(i % 53 - 26, i % 31 - 15)).collect()
}

fn bench_apply(c: &mut Criterion) {
    let points = sample_points();
    let mut group = c.benchmark_group("transform/apply_1024");
    for (name, t) in [
        ("identity", Transform::IDENTITY),
        ("translation", Transform::translation(Vec2::new(7, -3))),
        ("scale", Transform::scale_xy(2, 3)),
        ("rotation", Transform::ROT_90),
        (
            "general",
            Transform::from_components(2, 1, 1, 1, 5, -6).unwrap(),
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(t.apply(black_box(p)));
                }
            });
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let steps = [
        Transform::translation(Vec2::new(3, 4)),
        Transform::ROT_90,
        Transform::scale_xy(2, -1),
        Transform::rotation_about(Point::new(5, 5), 2),
    ];
    c.bench_function("transform/compose_chain", |b| {
        b.iter(|| {
            let mut acc = Transform::IDENTITY;
            for &t in &steps {
                acc = acc.then(black_box(t));
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_apply, bench_compose);
criterion_main!(benches);
