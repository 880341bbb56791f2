// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quad-tree over [`Point`]s with rectangle and radius queries.
//!
//! The tree keeps its nodes in an arena and addresses children by index.
//! A node stores up to `capacity` points; the insertion that finds it full splits it into
//! four congruent quadrants and hands that point (and every later one) to the quadrant
//! whose half-open boundary contains it. Points already stored in a split node stay there.
//!
//! The tree is meant to be rebuilt wholesale with [`QuadTree::build`] whenever the point
//! collection changes, so no rebalancing is attempted.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::types::{Point, Rect};

/// Default node capacity used by [`QuadTree::build`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Depth at which nodes stop subdividing and accept points past capacity.
///
/// Coincident points would otherwise split the same corner forever.
pub const MAX_DEPTH: u32 = 32;

/// Side length used for the root boundary when the input has no extent.
const MIN_EXTENT: f64 = 5.0;

/// Growth factor applied to the bounding extent of the input.
const INFLATION: f64 = 1.01;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node {
    boundary: Rect,
    depth: u32,
    points: Vec<Point>,
    /// `[nw, ne, sw, se]`, present once the node has subdivided.
    children: Option<[NodeIdx; 4]>,
}

impl Node {
    fn new(boundary: Rect, depth: u32) -> Self {
        Self {
            boundary,
            depth,
            points: Vec::new(),
            children: None,
        }
    }
}

/// Minimal bounding rectangle of `points`, inflated by 1% on each dimension.
///
/// A dimension with no extent (or an empty input) falls back to a fixed side of 5 so the
/// result always has a usable, non-zero area.
pub fn find_boundary(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::new(0.0, 0.0, MIN_EXTENT, MIN_EXTENT);
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let extent = |lo: f64, hi: f64| {
        let w = (hi - lo) * INFLATION;
        if w > 0.0 { w } else { MIN_EXTENT }
    };
    Rect::new(
        0.5 * (min_x + max_x),
        0.5 * (min_y + max_y),
        extent(min_x, max_x),
        extent(min_y, max_y),
    )
}

/// Quad-tree spatial index over points.
#[derive(Clone)]
pub struct QuadTree {
    capacity: usize,
    len: usize,
    nodes: Vec<Node>,
}

impl QuadTree {
    /// Create an empty tree over `boundary`. A capacity of zero is treated as one.
    pub fn new(boundary: Rect, capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            len: 0,
            nodes: vec![Node::new(boundary, 0)],
        }
    }

    /// Build a tree with [`DEFAULT_CAPACITY`] over the bounds of `points` and insert them all.
    pub fn build(points: &[Point]) -> Self {
        Self::build_with_capacity(points, DEFAULT_CAPACITY)
    }

    /// Build a tree with the given node capacity over the bounds of `points`.
    pub fn build_with_capacity(points: &[Point], capacity: usize) -> Self {
        let mut tree = Self::new(find_boundary(points), capacity);
        for p in points {
            tree.insert(p.clone());
        }
        tree
    }

    /// Boundary of the root node.
    pub fn boundary(&self) -> Rect {
        self.nodes[NodeIdx::ROOT.get()].boundary
    }

    /// Node capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node; a lone root has depth zero.
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Whether the root has split into quadrants.
    pub fn is_subdivided(&self) -> bool {
        self.nodes[NodeIdx::ROOT.get()].children.is_some()
    }

    /// Points stored directly in the root node.
    pub fn root_points(&self) -> &[Point] {
        &self.nodes[NodeIdx::ROOT.get()].points
    }

    /// Every stored point, in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter().flat_map(|n| n.points.iter())
    }

    /// Boundaries of every node, root first, in creation order.
    pub fn boundaries(&self) -> impl Iterator<Item = Rect> + '_ {
        self.nodes.iter().map(|n| n.boundary)
    }

    /// Insert a point. Returns `false` if no node boundary contains it.
    pub fn insert(&mut self, point: Point) -> bool {
        let stored = self.insert_at(NodeIdx::ROOT, point);
        if stored {
            self.len += 1;
        }
        stored
    }

    fn insert_at(&mut self, idx: NodeIdx, point: Point) -> bool {
        let node = &self.nodes[idx.get()];
        if !node.boundary.contains(&point) {
            return false;
        }
        let has_room = node.points.len() < self.capacity || node.depth >= MAX_DEPTH;
        let existing = node.children;
        let children = match existing {
            Some(children) => children,
            None if has_room => {
                self.nodes[idx.get()].points.push(point);
                return true;
            }
            None => self.subdivide(idx),
        };
        // Half-open quadrants: at most one child contains the point.
        let target = children
            .into_iter()
            .find(|c| self.nodes[c.get()].boundary.contains(&point));
        match target {
            Some(child) => self.insert_at(child, point),
            None => false,
        }
    }

    fn subdivide(&mut self, idx: NodeIdx) -> [NodeIdx; 4] {
        let parent = &self.nodes[idx.get()];
        let depth = parent.depth + 1;
        let quads = parent.boundary.quadrants();
        let base = self.nodes.len();
        self.nodes.extend(quads.into_iter().map(|q| Node::new(q, depth)));
        let children = [
            NodeIdx(base),
            NodeIdx(base + 1),
            NodeIdx(base + 2),
            NodeIdx(base + 3),
        ];
        self.nodes[idx.get()].children = Some(children);
        children
    }

    /// Remove every entry whose id matches `point.id`.
    ///
    /// Every node whose boundary contains the point's coordinates drops matching entries,
    /// and the scan descends into all children of such nodes. Returns the number of
    /// entries removed.
    pub fn remove(&mut self, point: &Point) -> usize {
        let removed = self.remove_at(NodeIdx::ROOT, point);
        self.len -= removed;
        removed
    }

    fn remove_at(&mut self, idx: NodeIdx, point: &Point) -> usize {
        let node = &mut self.nodes[idx.get()];
        if !node.boundary.contains(point) {
            return 0;
        }
        let before = node.points.len();
        node.points.retain(|p| p.id != point.id);
        let mut removed = before - node.points.len();
        if let Some(children) = node.children {
            for child in children {
                removed += self.remove_at(child, point);
            }
        }
        removed
    }

    /// All stored points that `rect` contains (half-open).
    pub fn query(&self, rect: &Rect) -> Vec<&Point> {
        self.collect(rect, |p| rect.contains(p))
    }

    /// All stored points within Euclidean distance `radius` of `center` (inclusive).
    ///
    /// Only nodes intersecting the square of side `2 * radius` around `center` are
    /// visited. A negative or NaN radius matches nothing.
    pub fn query_radius(&self, center: &Point, radius: f64) -> Vec<&Point> {
        self.query_radius_xy(center.x, center.y, radius)
    }

    /// [`QuadTree::query_radius`] for a bare coordinate pair.
    pub fn query_radius_xy(&self, x: f64, y: f64, radius: f64) -> Vec<&Point> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let square = Rect::around(x, y, radius);
        let r2 = radius * radius;
        self.collect(&square, |p| p.distance_squared_to(x, y) <= r2)
    }

    /// The stored point nearest to `center` within `radius`, if any.
    pub fn nearest(&self, center: &Point, radius: f64) -> Option<&Point> {
        center.nearest(self.query_radius(center, radius))
    }

    fn collect<'a>(&'a self, area: &Rect, keep: impl Fn(&Point) -> bool) -> Vec<&'a Point> {
        let mut out = Vec::new();
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx.get()];
            if !node.boundary.intersects(area) {
                continue;
            }
            out.extend(node.points.iter().filter(|&p| keep(p)));
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
        out
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, idx: NodeIdx) -> fmt::Result {
        let node = &self.nodes[idx.get()];
        let indent = node.depth as usize * 2;
        writeln!(f, "{}", node.boundary)?;
        write!(f, "{:indent$}", "")?;
        for (i, p) in node.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        if let Some(children) = node.children {
            let [nw, ne, sw, se] = children;
            for (name, child) in [("NW", nw), ("NE", ne), ("SE", se), ("SW", sw)] {
                write!(f, "\n{:indent$}{name}: ", "")?;
                self.fmt_node(f, child)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, NodeIdx::ROOT)
    }
}

impl fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary())
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
