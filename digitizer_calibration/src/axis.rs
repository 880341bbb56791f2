// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-axis two-point calibration and the linear map it fits.

/// A pixel position paired with the data value it represents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// Position along the axis in pixel space.
    pub pixel: f64,
    /// Data value at that position.
    pub value: f64,
}

impl Reference {
    /// Create a reference pair.
    pub const fn new(pixel: f64, value: f64) -> Self {
        Self { pixel, value }
    }
}

/// Error returned by [`AxisCalibration::fit`] when both references share a pixel position.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[error("both references sit at pixel {pixel}; the axis cannot be fitted")]
pub struct DegenerateAxis {
    /// The shared pixel position.
    pub pixel: f64,
}

/// `value = slope * pixel + intercept`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearMap {
    /// Data units per pixel.
    pub slope: f64,
    /// Data value at pixel zero.
    pub intercept: f64,
}

impl LinearMap {
    /// Map that yields NaN for every input; stands in for a degenerate axis.
    pub const INVALID: Self = Self {
        slope: f64::NAN,
        intercept: f64::NAN,
    };

    /// The identity map.
    pub const IDENTITY: Self = Self {
        slope: 1.0,
        intercept: 0.0,
    };

    /// Apply the map to a pixel position.
    #[inline]
    pub fn apply(&self, pixel: f64) -> f64 {
        self.slope * pixel + self.intercept
    }

    /// Whether both coefficients are finite.
    pub fn is_valid(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Two reference pairs on one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisCalibration {
    /// First reference (`x1` or `y1`).
    pub first: Reference,
    /// Second reference (`x2` or `y2`).
    pub second: Reference,
}

impl AxisCalibration {
    /// Create a calibration from two references.
    pub const fn new(first: Reference, second: Reference) -> Self {
        Self { first, second }
    }

    /// Whether both references share a pixel position.
    pub fn is_degenerate(&self) -> bool {
        self.first.pixel == self.second.pixel
    }

    /// Fit the line through both references.
    pub fn fit(&self) -> Result<LinearMap, DegenerateAxis> {
        let Self { first, second } = *self;
        if self.is_degenerate() {
            return Err(DegenerateAxis { pixel: first.pixel });
        }
        let slope = (second.value - first.value) / (second.pixel - first.pixel);
        Ok(LinearMap {
            slope,
            intercept: first.value - slope * first.pixel,
        })
    }

    /// The fitted map, or [`LinearMap::INVALID`] when the axis is degenerate.
    pub fn map(&self) -> LinearMap {
        self.fit().unwrap_or(LinearMap::INVALID)
    }

    /// Convert a pixel position on this axis to a data value.
    pub fn convert(&self, pixel: f64) -> f64 {
        self.map().apply(pixel)
    }
}
