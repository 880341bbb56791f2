// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The painting seam between the controller and whatever draws the canvas.
//!
//! The controller never styles anything itself. It walks its state in a fixed order and
//! describes each mark through [`Surface`]; the implementor picks colors, radii, and fonts.
//! All positions are in content (image pixel) space; apply the view transform when drawing.

use digitizer_calibration::AxisKey;
use kurbo::{Point, Rect};

use crate::types::MarkerStyle;

/// A drawing target for [`Controller::paint`](crate::Controller::paint).
pub trait Surface {
    /// Paint a point marker.
    fn marker(&mut self, at: Point, style: MarkerStyle, label: Option<&str>);

    /// Paint a quad-tree node boundary (debug overlay).
    fn boundary(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// Paint a calibration marker handle. `active` is set while it is hovered or dragged.
    fn calibration_handle(&mut self, key: AxisKey, at: Point, active: bool) {
        let _ = (key, at, active);
    }
}

/// Convert an index rectangle to a kurbo rectangle.
pub(crate) fn to_kurbo_rect(rect: digitizer_index::Rect) -> Rect {
    Rect::new(rect.west(), rect.south(), rect.east(), rect.north())
}

/// Convert an index point to a kurbo point.
pub(crate) fn to_kurbo_point(point: &digitizer_index::Point) -> Point {
    Point::new(point.x, point.y)
}
