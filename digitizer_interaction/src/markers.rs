// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calibration marker handles: where they sit on the canvas and which one is under the cursor.
//!
//! X references are handled along the bottom edge of the image frame, at
//! `(pixel, frame.height)`; Y references along the left edge, at `(0, pixel)`. Dragging a
//! handle only changes the coordinate that its axis calibrates.

use digitizer_calibration::{Axis, AxisKey, Calibration};
use kurbo::{Point, Size};

/// Content-space position of the handle for `key`.
pub fn handle_position(calibration: &Calibration, key: AxisKey, frame: Size) -> Point {
    let pixel = calibration.reference(key).pixel;
    match key.axis() {
        Axis::X => Point::new(pixel, frame.height),
        Axis::Y => Point::new(0.0, pixel),
    }
}

/// The handle nearest to `at` within `radius`, if any. Earlier keys win ties.
pub fn marker_at(calibration: &Calibration, frame: Size, at: Point, radius: f64) -> Option<AxisKey> {
    let r2 = radius * radius;
    let mut best: Option<(AxisKey, f64)> = None;
    for key in AxisKey::ALL {
        let d = (handle_position(calibration, key, frame) - at).hypot2();
        if d > r2 {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((key, d)),
        }
    }
    best.map(|(key, _)| key)
}

/// The coordinate of `at` that a drag of `key` writes into the calibration.
pub fn dragged_pixel(key: AxisKey, at: Point) -> f64 {
    match key.axis() {
        Axis::X => at.x,
        Axis::Y => at.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_sit_on_frame_edges() {
        let cal = Calibration::for_image(200.0, 100.0);
        let frame = Size::new(200.0, 100.0);
        assert_eq!(
            handle_position(&cal, AxisKey::X1, frame),
            Point::new(40.0, 100.0)
        );
        assert_eq!(
            handle_position(&cal, AxisKey::Y2, frame),
            Point::new(0.0, 20.0)
        );
    }

    #[test]
    fn marker_hit_respects_radius() {
        let cal = Calibration::default();
        let frame = Size::new(100.0, 100.0);
        assert_eq!(
            marker_at(&cal, frame, Point::new(82.0, 97.0), 7.0),
            Some(AxisKey::X2)
        );
        assert_eq!(marker_at(&cal, frame, Point::new(50.0, 50.0), 7.0), None);
    }

    #[test]
    fn drag_writes_axis_coordinate() {
        let at = Point::new(12.0, 34.0);
        assert_eq!(dragged_pixel(AxisKey::X1, at), 12.0);
        assert_eq!(dragged_pixel(AxisKey::Y1, at), 34.0);
    }
}
