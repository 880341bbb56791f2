// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=digitizer_calibration --heading-base-level=0

//! Digitizer Calibration: two-point linear axis calibration.
//!
//! A [`Calibration`] holds two [`Reference`] pairs per axis, each tying a pixel position to
//! the data value it represents. Fitting an axis gives `value = slope * pixel + intercept`
//! with `slope = (v2 - v1) / (p2 - p1)` and `intercept = v1 - slope * p1`.
//! A [`CoordsConverter`] applies both axis maps independently to pixel-space points.
//!
//! References are addressed by the fixed key set [`AxisKey`] (`x1`, `x2`, `y1`, `y2`) and
//! can be edited on either field: the pixel position when a marker is dragged, the value
//! when the number is typed. Build a fresh converter after each edit; it is a cheap view
//! over the two fitted maps.
//!
//! ## Degenerate axes
//!
//! When both references of an axis share a pixel position the axis cannot be fitted.
//! [`AxisCalibration::fit`] and [`Calibration::check`] report this as an error, while the
//! converter keeps working and yields NaN for that axis so the UI can show "uncalibrated".
//!
//! # Example
//!
//! ```rust
//! use digitizer_calibration::{AxisKey, Calibration};
//!
//! let mut cal = Calibration::default();
//! cal.set_pixel(AxisKey::X1, 100.0);
//! cal.set_value(AxisKey::X1, 0.0);
//! cal.set_pixel(AxisKey::X2, 500.0);
//! cal.set_value(AxisKey::X2, 50.0);
//!
//! let data = cal.converter().convert_xy(300.0, 0.0);
//! assert!((data.x - 25.0).abs() < 1e-9);
//!
//! // Collapse the Y axis: conversions become non-finite instead of failing.
//! let y1 = cal.reference(AxisKey::Y1).pixel;
//! cal.set_pixel(AxisKey::Y2, y1);
//! assert!(!cal.converter().convert_xy(0.0, 0.0).y.is_finite());
//! assert!(cal.check().is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod axis;
pub mod key;
pub mod model;

pub use axis::{AxisCalibration, DegenerateAxis, LinearMap, Reference};
pub use key::{Axis, AxisKey, ParseAxisKeyError};
pub use model::{Calibration, CalibrationError, CoordsConverter, DataPoint};
