// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-point axis calibration and conversion of pixel positions to data values.
//!
//! Run:
//! - `cargo run -p digitizer_demos --example calibration_basics`

use digitizer_calibration::{AxisKey, Calibration};
use digitizer_index::{Point, PointId};

fn main() {
    // An 800×600 chart whose x axis runs 0..50 between pixels 100 and 500,
    // and whose y axis runs 0..10 between pixels 550 (bottom) and 50 (top).
    let mut cal = Calibration::for_image(800.0, 600.0);
    for (key, pixel, value) in [
        ("x1", 100.0, 0.0),
        ("x2", 500.0, 50.0),
        ("y1", 550.0, 0.0),
        ("y2", 50.0, 10.0),
    ] {
        let key: AxisKey = key.parse().expect("fixed key set");
        cal.set_pixel(key, pixel);
        cal.set_value(key, value);
    }

    let converter = cal.converter();
    for (i, (x, y)) in [(100.0, 550.0), (300.0, 300.0), (500.0, 50.0)].into_iter().enumerate() {
        let p = Point::new(PointId::new(i as u64 + 1), x, y);
        let d = converter.convert(&p);
        println!("{p}: data ({:.3}, {:.3})", d.x, d.y);
    }

    // Collapse the x axis: conversion keeps working but reports non-finite values.
    cal.set_pixel(AxisKey::X2, 100.0);
    match cal.check() {
        Ok(()) => println!("calibration ok"),
        Err(err) => println!("calibration problem: {err}"),
    }
    let d = cal.converter().convert_xy(300.0, 300.0);
    println!("with a degenerate x axis: ({}, {:.3})", d.x, d.y);

    if let Err(err) = "z9".parse::<AxisKey>() {
        println!("{err}");
    }
}
