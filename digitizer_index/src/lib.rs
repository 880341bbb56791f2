// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=digitizer_index --heading-base-level=0

//! Digitizer Index: a quad-tree over identified 2D points.
//!
//! Digitizer Index is the hit-testing building block of the digitizer.
//!
//! - Build a [`QuadTree`] from a point collection in one call; the root boundary is the
//!   collection's bounding box inflated by 1% (see [`find_boundary`]).
//! - Query by half-open rectangle ([`QuadTree::query`]) or by Euclidean radius
//!   ([`QuadTree::query_radius`]), or pick the nearest point within a radius.
//! - Remove entries by [`PointId`].
//!
//! The tree is rebuilt wholesale whenever the collection changes. That keeps the structure
//! trivially consistent with its source and is cheap for the low thousands of points a
//! person places by hand.
//!
//! # Example
//!
//! ```rust
//! use digitizer_index::{Point, PointId, QuadTree, Rect};
//!
//! let points: Vec<Point> = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0), (5.0, 5.0)]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, (x, y))| Point::new(PointId::new(i as u64 + 1), x, y))
//!     .collect();
//!
//! let tree = QuadTree::build(&points);
//! assert!(tree.is_subdivided());
//! assert_eq!(tree.query(&tree.boundary()).len(), 5);
//!
//! // Hit-test around a cursor position.
//! let cursor = Point::cursor(9.0, 9.5);
//! let hit = tree.nearest(&cursor, 2.0).unwrap();
//! assert_eq!(hit.id, PointId::new(4));
//!
//! // Rectangles are half-open, so the east and north edges are excluded.
//! let hits = tree.query(&Rect::from_edges(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are expected to be finite. A point with a NaN coordinate is contained in no
//! rectangle and is therefore silently dropped on insert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod quadtree;
pub mod types;

pub use quadtree::{DEFAULT_CAPACITY, MAX_DEPTH, QuadTree, find_boundary};
pub use types::{Point, PointId, Rect};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn build_then_query_returns_everything_once() {
        let points: Vec<Point> = (0..50_u32)
            .map(|i| {
                Point::new(
                    PointId::new(u64::from(i) + 1),
                    f64::from(i % 7) * 3.0,
                    f64::from(i / 7) * 2.0,
                )
            })
            .collect();
        let tree = QuadTree::build(&points);
        let mut found: Vec<u64> = tree
            .query(&tree.boundary())
            .into_iter()
            .map(|p| p.id.get())
            .collect();
        found.sort_unstable();
        let expected: Vec<u64> = (1..=50).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn remove_then_query_never_returns_id() {
        let points: Vec<Point> = (0..12_u32)
            .map(|i| Point::new(PointId::new(u64::from(i) + 1), f64::from(i), f64::from(i)))
            .collect();
        let mut tree = QuadTree::build(&points);
        tree.remove(&points[3]);
        assert!(
            tree.query(&tree.boundary())
                .iter()
                .all(|p| p.id != points[3].id)
        );
        assert_eq!(tree.len(), 11);
    }
}
