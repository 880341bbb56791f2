// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use digitizer_index::{Point, PointId, QuadTree};

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = PointId::new((y * n + x) as u64 + 1);
            out.push(Point::new(id, x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_external_compare");
    for &n in &[32usize, 64] {
        let points = gen_grid_points(n, 10.0);
        let center = Point::cursor(160.0, 160.0);
        let radius = 35.0;
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_radius_n{n}"), |b| {
            b.iter(|| {
                let tree = QuadTree::build(&points);
                black_box(tree.query_radius(&center, radius).len())
            });
        });

        group.bench_function(format!("rstar_build_radius_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let hits = tree
                        .locate_within_distance([center.x, center.y], radius * radius)
                        .count();
                    black_box(hits)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
