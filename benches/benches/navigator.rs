// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for directional navigator queries.
//!
//! Uses a deterministic synthetic grid of cells as the rectangle set: large
//! enough to make the O(n) scan and the one-off sort visible, regular enough
//! to be reproducible.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parterre_geom::{Dir, Rect};
use parterre_nav::{Algorithm, NavRect, Navigator};

const GRID: i32 = 32;
const PITCH: i32 = 15;
const CELL: i32 = 10;

fn cell(cx: i32, cy: i32) -> Rect {
    Rect::new(
        cx * PITCH,
        cy * PITCH,
        cx * PITCH + CELL,
        cy * PITCH + CELL,
    )
}

fn grid_navigator() -> Navigator<(i32, i32)> {
    (0..GRID)
        .flat_map(|cy| (0..GRID).map(move |cx| NavRect::new(cell(cx, cy), (cx, cy))))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("navigator/build_1024", |b| {
        b.iter(|| black_box(grid_navigator()));
    });
}

fn bench_first_query(c: &mut Criterion) {
    // First query pays for the direction's sort; build the navigator per
    // iteration so the cache is always cold.
    c.bench_function("navigator/cold_query_1024", |b| {
        let start = cell(GRID / 2, GRID / 2);
        b.iter(|| {
            let nav = grid_navigator();
            black_box(nav.find_from(&start, Dir::PosX, Algorithm::Strict));
        });
    });
}

fn bench_warm_queries(c: &mut Criterion) {
    let nav = grid_navigator();
    let start = cell(GRID / 2, GRID / 2);
    // Warm every per-direction cache up front.
    for dir in Dir::ALL {
        let _ = nav.find_from(&start, dir, Algorithm::Natural);
    }

    let mut group = c.benchmark_group("navigator/warm_query_1024");
    for (name, algo) in [
        ("natural", Algorithm::Natural),
        ("strict", Algorithm::Strict),
        ("prefer_strict", Algorithm::PreferStrict),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for dir in Dir::ALL {
                    black_box(nav.find_from(black_box(&start), dir, algo));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_first_query, bench_warm_queries);
criterion_main!(benches);
