// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted digitizing session: pointer input in, paint calls and an export table out.
//!
//! Run:
//! - `cargo run -p digitizer_demos --example scripted_session`

use digitizer_calibration::AxisKey;
use digitizer_interaction::{
    CanvasHost, CanvasSession, Controller, ControllerConfig, DebugFlags, MarkerStyle,
    PointerButton, Surface,
};
use kurbo::{Affine, Point, Rect, Size, Vec2};

struct PrintHost;

impl CanvasHost for PrintHost {
    fn attach(&mut self) {
        println!("[host] render loop attached");
    }
    fn detach(&mut self) {
        println!("[host] render loop detached");
    }
}

struct PrintSurface;

impl Surface for PrintSurface {
    fn marker(&mut self, at: Point, style: MarkerStyle, label: Option<&str>) {
        println!("  marker {style:?} at ({:.1}, {:.1}) {}", at.x, at.y, label.unwrap_or(""));
    }
    fn boundary(&mut self, rect: Rect) {
        println!(
            "  boundary ({:.1}, {:.1})-({:.1}, {:.1})",
            rect.x0, rect.y0, rect.x1, rect.y1
        );
    }
    fn calibration_handle(&mut self, key: AxisKey, at: Point, active: bool) {
        let mark = if active { "*" } else { "" };
        println!("  handle {key}{mark} at ({:.1}, {:.1})", at.x, at.y);
    }
}

fn main() {
    let mut host = PrintHost;
    let config = ControllerConfig {
        debug: DebugFlags::LABELS,
        ..ControllerConfig::default()
    };
    let mut session = CanvasSession::new(&mut host, Controller::new(config));
    session.set_image_size(Size::new(400.0, 300.0));
    // Zoomed in 2× and panned.
    session.set_view_transform(Affine::translate(Vec2::new(-100.0, -50.0)) * Affine::scale(2.0));

    let mut surface = PrintSurface;
    let clicks = [(300.0, 250.0), (400.0, 200.0), (500.0, 350.0)];
    for (x, y) in clicks {
        session.pointer_move(Point::new(x, y));
        println!("down -> {:?}", session.pointer_down(PointerButton::Primary));
        session.pointer_up(PointerButton::Primary);
    }
    println!("frame painted: {}", session.frame(&mut surface));

    // Drag the second point somewhere else.
    session.pointer_move(Point::new(401.0, 201.0));
    println!("down -> {:?}", session.pointer_down(PointerButton::Primary));
    session.pointer_move(Point::new(420.0, 150.0));
    println!("up   -> {:?}", session.pointer_up(PointerButton::Primary));

    // Delete the first one.
    session.pointer_move(Point::new(300.0, 250.0));
    println!("down -> {:?}", session.pointer_down(PointerButton::Secondary));
    println!("frame painted: {}", session.frame(&mut surface));

    println!("id, label, px, py, x, y");
    for row in session.rows() {
        println!(
            "{}, {}, {:.1}, {:.1}, {:.3}, {:.3}",
            row.point.id,
            row.point.display_label(),
            row.point.x,
            row.point.y,
            row.data.x,
            row.data.y
        );
    }

    let removed = session.clear_all();
    println!("cleared {removed}, undo -> {}", session.undo_clear());
    println!("{:?}", *session);
}
