// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-axis calibration model and the converter derived from it.

use digitizer_index::Point;

use crate::axis::{AxisCalibration, DegenerateAxis, LinearMap, Reference};
use crate::key::{Axis, AxisKey};

/// Error returned by [`Calibration::check`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    /// An axis has both references at the same pixel position.
    #[error("{axis} axis is degenerate")]
    Degenerate {
        /// The offending axis.
        axis: Axis,
        /// Details from the axis fit.
        #[source]
        source: DegenerateAxis,
    },
}

/// Independent X and Y axis calibrations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calibration {
    /// Horizontal axis (`x1`, `x2`).
    pub x: AxisCalibration,
    /// Vertical axis (`y1`, `y2`).
    pub y: AxisCalibration,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::for_image(100.0, 100.0)
    }
}

impl Calibration {
    /// Create a calibration from two axis calibrations.
    pub const fn new(x: AxisCalibration, y: AxisCalibration) -> Self {
        Self { x, y }
    }

    /// Default framing for an image of the given pixel size.
    ///
    /// X references sit at 20% and 80% of the width and map to 0 and 1. Y references sit at
    /// 80% and 20% of the height and map to 0 and 1, since image rows grow downward.
    pub fn for_image(width: f64, height: f64) -> Self {
        Self {
            x: AxisCalibration::new(
                Reference::new(0.2 * width, 0.0),
                Reference::new(0.8 * width, 1.0),
            ),
            y: AxisCalibration::new(
                Reference::new(0.8 * height, 0.0),
                Reference::new(0.2 * height, 1.0),
            ),
        }
    }

    /// Calibration of one axis.
    pub fn axis(&self, axis: Axis) -> &AxisCalibration {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisCalibration {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// The reference addressed by `key`.
    pub fn reference(&self, key: AxisKey) -> Reference {
        let axis = self.axis(key.axis());
        if key.is_first() {
            axis.first
        } else {
            axis.second
        }
    }

    /// Mutable access to the reference addressed by `key`.
    pub fn reference_mut(&mut self, key: AxisKey) -> &mut Reference {
        let axis = self.axis_mut(key.axis());
        if key.is_first() {
            &mut axis.first
        } else {
            &mut axis.second
        }
    }

    /// Move the pixel position of one reference (a marker drag).
    pub fn set_pixel(&mut self, key: AxisKey, pixel: f64) {
        self.reference_mut(key).pixel = pixel;
        self.warn_if_degenerate(key);
    }

    /// Change the data value of one reference (a typed edit).
    pub fn set_value(&mut self, key: AxisKey, value: f64) {
        self.reference_mut(key).value = value;
        self.warn_if_degenerate(key);
    }

    #[cfg(feature = "tracing")]
    fn warn_if_degenerate(&self, key: AxisKey) {
        let axis = self.axis(key.axis());
        if axis.is_degenerate() {
            tracing::warn!(
                key = key.as_str(),
                pixel = axis.first.pixel,
                "calibration axis is degenerate; conversions will be non-finite"
            );
        } else {
            tracing::debug!(key = key.as_str(), "calibration reference edited");
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn warn_if_degenerate(&self, _key: AxisKey) {}

    /// Verify both axes can be fitted.
    pub fn check(&self) -> Result<(), CalibrationError> {
        for axis in [Axis::X, Axis::Y] {
            self.axis(axis)
                .fit()
                .map_err(|source| CalibrationError::Degenerate { axis, source })?;
        }
        Ok(())
    }

    /// Build the converter for the current references.
    pub fn converter(&self) -> CoordsConverter {
        CoordsConverter {
            x: self.x.map(),
            y: self.y.map(),
        }
    }
}

/// A point in calibrated data space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    /// Horizontal data value.
    pub x: f64,
    /// Vertical data value.
    pub y: f64,
}

impl DataPoint {
    /// Whether both coordinates are finite; a non-finite value means "uncalibrated".
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel-to-data mapping derived from a [`Calibration`].
///
/// Each axis is mapped independently; there is no rotation or skew. A degenerate axis maps
/// every input to NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordsConverter {
    x: LinearMap,
    y: LinearMap,
}

impl Default for CoordsConverter {
    fn default() -> Self {
        Self {
            x: LinearMap::IDENTITY,
            y: LinearMap::IDENTITY,
        }
    }
}

impl CoordsConverter {
    /// Converter from explicit per-axis maps.
    pub const fn from_maps(x: LinearMap, y: LinearMap) -> Self {
        Self { x, y }
    }

    /// Map of one axis.
    pub fn map(&self, axis: Axis) -> LinearMap {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Convert a pixel-space point.
    pub fn convert(&self, point: &Point) -> DataPoint {
        self.convert_xy(point.x, point.y)
    }

    /// Convert a bare pixel coordinate pair.
    pub fn convert_xy(&self, x: f64, y: f64) -> DataPoint {
        DataPoint {
            x: self.x.apply(x),
            y: self.y.apply(y),
        }
    }

    /// Whether both axes have finite maps.
    pub fn is_calibrated(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitizer_index::PointId;

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    #[test]
    fn scenario_x_axis_midpoint() {
        let mut cal = Calibration::default();
        cal.set_pixel(AxisKey::X1, 100.0);
        cal.set_value(AxisKey::X1, 0.0);
        cal.set_pixel(AxisKey::X2, 500.0);
        cal.set_value(AxisKey::X2, 50.0);
        let conv = cal.converter();
        assert!(close(conv.convert_xy(300.0, 0.0).x, 25.0));
    }

    #[test]
    fn axes_are_independent() {
        let cal = Calibration::new(
            AxisCalibration::new(Reference::new(0.0, 0.0), Reference::new(10.0, 100.0)),
            AxisCalibration::new(Reference::new(0.0, 5.0), Reference::new(10.0, 5.0)),
        );
        let data = cal
            .converter()
            .convert(&Point::new(PointId::new(1), 4.0, 7.0));
        assert!(close(data.x, 40.0));
        assert!(close(data.y, 5.0));
    }

    #[test]
    fn default_framing_flips_y() {
        let cal = Calibration::for_image(200.0, 100.0);
        assert_eq!(cal.reference(AxisKey::X1), Reference::new(40.0, 0.0));
        assert_eq!(cal.reference(AxisKey::Y1), Reference::new(80.0, 0.0));
        let conv = cal.converter();
        let top = conv.convert_xy(40.0, 20.0);
        assert!(close(top.x, 0.0));
        assert!(close(top.y, 1.0));
        assert!(cal.check().is_ok());
    }

    #[test]
    fn degenerate_axis_poisons_only_that_axis() {
        let mut cal = Calibration::default();
        let y1 = cal.reference(AxisKey::Y1).pixel;
        cal.set_pixel(AxisKey::Y2, y1);
        let conv = cal.converter();
        assert!(!conv.is_calibrated());
        let data = conv.convert_xy(20.0, 12.0);
        assert!(data.x.is_finite());
        assert!(!data.y.is_finite());
        assert!(!data.is_finite());
        assert!(matches!(
            cal.check(),
            Err(CalibrationError::Degenerate { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn edits_are_reflected_by_the_next_converter() {
        let mut cal = Calibration::default();
        let before = cal.converter();
        cal.set_value(AxisKey::X2, 2.0);
        let after = cal.converter();
        assert_ne!(before, after);
        assert!(close(after.convert_xy(80.0, 0.0).x, 2.0));
    }
}
