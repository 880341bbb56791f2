// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: point identity, points, and half-open rectangles.

use alloc::string::String;
use core::fmt;

/// Opaque identifier of a digitized point.
///
/// Identifiers are assigned when a point is created and stay stable until the point is
/// deleted. The raw value `0` is reserved for the transient cursor point
/// ([`PointId::CURSOR`]) which never belongs to a point collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(u64);

impl PointId {
    /// Sentinel identifier carried by the cursor ("mouse") point.
    pub const CURSOR: Self = Self(0);

    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the reserved cursor identifier.
    pub const fn is_cursor(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cursor() {
            f.write_str("MOUSE")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// A point in pixel space with identity and an optional display label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Identifier, unique within a point collection.
    pub id: PointId,
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
    /// Optional display string.
    pub label: Option<String>,
}

impl Point {
    /// Create an unlabeled point.
    pub const fn new(id: PointId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            label: None,
        }
    }

    /// Create a cursor point carrying [`PointId::CURSOR`].
    pub const fn cursor(x: f64, y: f64) -> Self {
        Self::new(PointId::CURSOR, x, y)
    }

    /// Return this point with `label` attached.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Squared Euclidean distance to `(x, y)`.
    #[inline]
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.distance_squared_to(other.x, other.y)
    }

    /// The candidate closest to this point. The first candidate wins on equal distance.
    pub fn nearest<'a, I>(&self, candidates: I) -> Option<&'a Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut best: Option<(&'a Self, f64)> = None;
        for candidate in candidates {
            let d = self.distance_squared(candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }
        best.map(|(p, _)| p)
    }

    /// The label if set, otherwise a short identifier label such as `#12`.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => alloc::format!("{}", self.id),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}, {:.3})", self.id, self.x, self.y)
    }
}

/// Axis-aligned rectangle described by its four edges.
///
/// The edges satisfy `west < east` and `south < north` for positive sizes. Center and size
/// are derived from them.
/// Containment is half-open: `x ∈ [west, east)` and `y ∈ [south, north)`, so a point on
/// an edge shared by two adjacent rectangles belongs to exactly one of them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl Rect {
    /// Create a rectangle from its center and size.
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_edges(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Create a rectangle from its west, south, east, and north edges.
    pub const fn from_edges(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// A square of side `2 * radius` centered on `(x, y)`.
    pub fn around(x: f64, y: f64, radius: f64) -> Self {
        Self::from_edges(x - radius, y - radius, x + radius, y + radius)
    }

    /// Horizontal center.
    pub fn cx(&self) -> f64 {
        0.5 * (self.west + self.east)
    }

    /// Vertical center.
    pub fn cy(&self) -> f64 {
        0.5 * (self.south + self.north)
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Minimum x edge.
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Maximum x edge.
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Minimum y edge.
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Maximum y edge.
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Half-open containment test for a coordinate pair.
    #[inline]
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        x >= self.west() && x < self.east() && y >= self.south() && y < self.north()
    }

    /// Half-open containment test for a point.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Whether the two rectangles overlap or touch (closed edges).
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.west() > self.east()
            || other.east() < self.west()
            || other.north() < self.south()
            || other.south() > self.north())
    }

    /// The four quadrants in `[nw, ne, sw, se]` order.
    ///
    /// Siblings share the parent's exact midpoints, so the quadrants tile the parent with
    /// no gap and every point the parent contains lies in exactly one of them.
    pub fn quadrants(&self) -> [Self; 4] {
        let Self {
            west,
            south,
            east,
            north,
        } = *self;
        let (mx, my) = (self.cx(), self.cy());
        [
            Self::from_edges(west, my, mx, north),
            Self::from_edges(mx, my, east, north),
            Self::from_edges(west, south, mx, my),
            Self::from_edges(mx, south, east, my),
        ]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BOUNDARY ({:.3} {:.3} {:.3} {:.3})",
            self.west(),
            self.north(),
            self.east(),
            self.south()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn edges_follow_center_and_size() {
        let r = Rect::new(10.0, 20.0, 4.0, 6.0);
        assert_eq!(r.west(), 8.0);
        assert_eq!(r.east(), 12.0);
        assert_eq!(r.south(), 17.0);
        assert_eq!(r.north(), 23.0);
        assert_eq!(Rect::from_edges(8.0, 17.0, 12.0, 23.0), r);
    }

    #[test]
    fn containment_is_half_open() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains_xy(-1.0, -1.0));
        assert!(!r.contains_xy(1.0, 0.0));
        assert!(!r.contains_xy(0.0, 1.0));
        assert!(r.contains_xy(0.999, 0.999));
    }

    #[test]
    fn shared_edge_belongs_to_one_quadrant() {
        let r = Rect::new(0.0, 0.0, 8.0, 8.0);
        let owners = r
            .quadrants()
            .iter()
            .filter(|q| q.contains_xy(0.0, 0.0))
            .count();
        assert_eq!(owners, 1);
    }

    #[test]
    fn quadrants_tile_parent() {
        let r = Rect::new(5.0, 5.0, 10.0, 10.0);
        let [nw, ne, sw, se] = r.quadrants();
        assert_eq!((nw.west(), nw.north()), (0.0, 10.0));
        assert_eq!((ne.east(), ne.north()), (10.0, 10.0));
        assert_eq!((sw.west(), sw.south()), (0.0, 0.0));
        assert_eq!((se.east(), se.south()), (10.0, 0.0));
        for q in [nw, ne, sw, se] {
            assert_eq!((q.width(), q.height()), (5.0, 5.0));
        }
    }

    #[test]
    fn quadrants_share_midpoints_on_awkward_bounds() {
        let r = Rect::new(-214.946_521_173_331_43, -137.444_964_992_604_13, 123.456_789, 98.765_43);
        let [nw, ne, sw, se] = r.quadrants();
        assert_eq!(nw.east(), ne.west());
        assert_eq!(sw.east(), se.west());
        assert_eq!(nw.south(), sw.north());
        assert_eq!(ne.south(), se.north());
        assert_eq!((nw.west(), ne.east()), (r.west(), r.east()));
        assert_eq!((sw.south(), nw.north()), (r.south(), r.north()));
        // The seam itself lands in exactly one quadrant.
        let (x, y) = (nw.east(), nw.south());
        assert!(r.contains_xy(x, y));
        let owners = [nw, ne, sw, se]
            .iter()
            .filter(|q| q.contains_xy(x, y))
            .count();
        assert_eq!(owners, 1);
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Rect::from_edges(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_edges(1.0, 0.0, 2.0, 1.0);
        let c = Rect::from_edges(1.5, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn nearest_prefers_first_on_ties() {
        let origin = Point::cursor(0.0, 0.0);
        let a = Point::new(PointId::new(1), 1.0, 0.0);
        let b = Point::new(PointId::new(2), 0.0, 1.0);
        let c = Point::new(PointId::new(3), 3.0, 0.0);
        let near = origin.nearest([&c, &a, &b]).map(|p| p.id);
        assert_eq!(near, Some(PointId::new(1)));
        assert!(origin.nearest(core::iter::empty()).is_none());
    }

    #[test]
    fn labels_and_display() {
        let p = Point::new(PointId::new(7), 1.0, 2.0);
        assert_eq!(p.display_label(), "#7");
        assert_eq!(p.clone().with_label("peak").display_label(), "peak");
        assert_eq!(PointId::CURSOR.to_string(), "MOUSE");
        assert_eq!(
            Rect::new(0.0, 0.0, 2.0, 2.0).to_string(),
            "BOUNDARY (-1.000 1.000 1.000 -1.000)"
        );
    }
}
