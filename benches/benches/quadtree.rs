// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use digitizer_index::{Point, PointId, QuadTree, Rect};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            Point::new(
                PointId::new(i as u64 + 1),
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            )
        })
        .collect()
}

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = PointId::new((y * n + x) as u64 + 1);
            out.push(Point::new(id, x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &count in &[100usize, 1_000, 5_000] {
        let points = gen_random_points(count, 2_000.0, 0x9e37_79b9_7f4a_7c15);
        group.throughput(Throughput::Elements(count as u64));
        for &capacity in &[1usize, 4, 16] {
            group.bench_function(format!("random_n{count}_cap{capacity}"), |b| {
                b.iter(|| black_box(QuadTree::build_with_capacity(&points, capacity)));
            });
        }
    }
    let grid = gen_grid_points(64, 10.0);
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("grid_64x64", |b| {
        b.iter(|| black_box(QuadTree::build(&grid)));
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    for &count in &[1_000usize, 5_000] {
        let points = gen_random_points(count, 2_000.0, 42);
        let tree = QuadTree::build(&points);
        let probes = gen_random_points(256, 2_000.0, 7);

        group.bench_function(format!("radius7_n{count}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for p in &probes {
                    hits += tree.query_radius(p, 7.0).len();
                }
                black_box(hits)
            });
        });

        group.bench_function(format!("nearest7_n{count}"), |b| {
            b.iter(|| {
                let mut found = 0usize;
                for p in &probes {
                    found += usize::from(tree.nearest(p, 7.0).is_some());
                }
                black_box(found)
            });
        });

        let window = Rect::from_edges(500.0, 500.0, 900.0, 900.0);
        group.bench_function(format!("rect400_n{count}"), |b| {
            b.iter(|| black_box(tree.query(&window).len()));
        });
    }
    group.finish();
}

fn bench_rebuild_vs_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_remove");
    let points = gen_random_points(1_000, 2_000.0, 99);
    let victim = points[points.len() / 2].clone();
    group.bench_function("remove_one_n1000", |b| {
        b.iter_batched(
            || QuadTree::build(&points),
            |mut tree| black_box(tree.remove(&victim)),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("rebuild_without_one_n1000", |b| {
        b.iter(|| {
            let rest: Vec<Point> = points.iter().filter(|p| p.id != victim.id).cloned().collect();
            black_box(QuadTree::build(&rest))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_rebuild_vs_remove);
criterion_main!(benches);
