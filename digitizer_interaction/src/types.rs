// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input, configuration, and output types for the controller.

use digitizer_calibration::{AxisKey, DataPoint};
use digitizer_index::{Point, PointId};

/// Pointer buttons the controller reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button (usually left). Creates and drags points.
    Primary,
    /// Secondary button (usually right). Deletes the hovered point.
    Secondary,
    /// Middle button; ignored by the controller.
    Auxiliary,
}

impl PointerButton {
    /// Map a DOM-style button index (`0` primary, `1` auxiliary, `2` secondary).
    pub const fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Debug overlays painted by [`Controller::paint`](crate::Controller::paint).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DebugFlags: u8 {
        /// Paint every quad-tree node boundary.
        const QUAD_TREE = 0b0000_0001;
        /// Paint the cursor point with its label.
        const CURSOR    = 0b0000_0010;
        /// Label unlabeled points with their short id.
        const LABELS    = 0b0000_0100;
    }
}

/// Controller tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Hit-test radius in screen pixels; divided by the zoom scale for content space.
    pub hit_radius_px: f64,
    /// Quad-tree node capacity.
    pub capacity: usize,
    /// Debug overlays.
    pub debug: DebugFlags,
    /// Whether calibration marker handles are painted and draggable.
    pub markers: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            hit_radius_px: 7.0,
            capacity: digitizer_index::DEFAULT_CAPACITY,
            debug: DebugFlags::empty(),
            markers: true,
        }
    }
}

/// What a pointer press or release did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A point was created at the cursor.
    Created(PointId),
    /// The hovered point was deleted.
    Deleted(PointId),
    /// Dragging of the hovered point began.
    DragStarted(PointId),
    /// A drag ended and the point moved to the cursor.
    Moved(PointId),
    /// A drag ended without a cursor position (or the point vanished); nothing moved.
    DragCancelled(PointId),
    /// Dragging of a calibration marker began.
    MarkerDragStarted(AxisKey),
    /// Dragging of a calibration marker ended.
    MarkerDragEnded(AxisKey),
}

/// Visual role of a painted marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// A point at rest.
    Normal,
    /// The point under the cursor.
    Hovered,
    /// The live preview of a point being dragged.
    Dragging,
    /// The cursor itself (debug overlay).
    Cursor,
}

/// One exported point: pixel position plus its calibrated data position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row<'a> {
    /// The digitized point.
    pub point: &'a Point,
    /// Its data-space coordinates; non-finite when an axis is uncalibrated.
    pub data: DataPoint,
}
