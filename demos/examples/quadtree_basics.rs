// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Digitizer Index: build, query by rectangle and radius, remove.
//!
//! Run:
//! - `cargo run -p digitizer_demos --example quadtree_basics`

use digitizer_index::{Point, PointId, QuadTree, Rect};

fn main() {
    let points: Vec<Point> = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0), (4.0, 6.0)]
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| Point::new(PointId::new(i as u64 + 1), x, y))
        .collect();

    let mut tree = QuadTree::build(&points);
    println!("{tree}");

    let hits = tree.query(&Rect::from_edges(0.0, 0.0, 5.0, 7.0));
    println!("hits in lower-left: {:?}", hits.iter().map(|p| p.id).collect::<Vec<_>>());

    let near = tree.nearest(&Point::cursor(4.5, 6.5), 2.0).map(|p| p.id);
    println!("nearest to cursor: {near:?}");

    tree.remove(&points[4]);
    println!("after remove: {} entries", tree.len());
}
