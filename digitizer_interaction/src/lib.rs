// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=digitizer_interaction --heading-base-level=0

//! Digitizer Interaction: pointer-driven point placement over an image.
//!
//! A [`Controller`] owns the digitized points, keeps a [`QuadTree`](digitizer_index::QuadTree)
//! over them for hit-testing, and turns pointer input into edits:
//!
//! - primary press on empty canvas creates a point at the cursor,
//! - primary press on a point starts dragging it, and release moves it,
//! - secondary press on a point deletes it,
//! - [`Controller::clear_all`] removes everything, undoable once with
//!   [`Controller::undo_clear`] until the next edit.
//!
//! Pointer positions arrive in screen space; the controller maps them to content (image
//! pixel) space through the view transform owned by the pan/zoom layer. The hit radius is
//! given in screen pixels, so it stays the same size on screen at any zoom.
//!
//! The controller also owns the axis [`Calibration`](digitizer_calibration::Calibration).
//! Its four references have draggable handles along the image edges, and
//! [`Controller::rows`] exports every point with its calibrated data coordinates.
//!
//! Painting goes through the [`Surface`] trait, and [`CanvasSession`] scopes a controller to
//! a host render loop.
//!
//! # Example
//!
//! ```rust
//! use digitizer_interaction::{Action, Controller, PointerButton};
//! use kurbo::{Affine, Point};
//!
//! let mut c = Controller::default();
//! c.set_view_transform(Affine::scale(2.0));
//!
//! // Screen (80, 80) is content (40, 40).
//! c.pointer_move(Point::new(80.0, 80.0));
//! let Some(Action::Created(id)) = c.pointer_down(PointerButton::Primary) else {
//!     unreachable!()
//! };
//! assert_eq!(c.hovered(), Some(id));
//!
//! c.pointer_down(PointerButton::Secondary);
//! assert!(c.points().is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: structured logs of edits, drags, and calibration changes.
//! - `serde`: `Serialize` for export [`Row`]s.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod logging;

pub mod controller;
pub mod hover;
pub mod markers;
pub mod paint;
pub mod session;
pub mod types;

pub use controller::Controller;
pub use hover::{HoverEvent, HoverState};
pub use paint::Surface;
pub use session::{CanvasHost, CanvasSession};
pub use types::{Action, ControllerConfig, DebugFlags, MarkerStyle, PointerButton, Row};
