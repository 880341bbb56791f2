// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: owns the points, the index, hover/drag state, and calibration.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use digitizer_calibration::{AxisKey, Calibration, CoordsConverter};
use digitizer_index::{Point, PointId, QuadTree};
use kurbo::{Affine, Point as ScreenPoint, Size};

use crate::hover::{HoverEvent, HoverState};
use crate::logging::{log_debug, log_info};
use crate::markers::{dragged_pixel, handle_position, marker_at};
use crate::paint::{Surface, to_kurbo_point, to_kurbo_rect};
use crate::types::{Action, ControllerConfig, DebugFlags, MarkerStyle, PointerButton, Row};

/// Point digitizing state machine.
///
/// Every mutation of the point collection rebuilds the quad-tree from scratch, marks the
/// controller dirty, drops any pending clear snapshot, and re-runs the hover hit test.
/// Reads (painting, export, accessors) never mutate.
pub struct Controller {
    config: ControllerConfig,
    view: Affine,
    frame: Size,
    points: Vec<Point>,
    index: QuadTree,
    next_id: u64,
    mouse: Option<Point>,
    hover: HoverState<PointId>,
    dragging: Option<PointId>,
    marker_hover: Option<AxisKey>,
    marker_drag: Option<AxisKey>,
    calibration: Calibration,
    converter: CoordsConverter,
    pending_clear: Option<Vec<Point>>,
    dirty: bool,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("points", &self.points.len())
            .field("hovered", &self.hover.current())
            .field("dragging", &self.dragging)
            .field("marker_drag", &self.marker_drag)
            .field("pending_clear", &self.pending_clear.as_ref().map(Vec::len))
            .field("dirty", &self.dirty)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl Controller {
    /// Create an empty controller with a 100×100 frame and identity view.
    pub fn new(config: ControllerConfig) -> Self {
        let frame = Size::new(100.0, 100.0);
        let calibration = Calibration::for_image(frame.width, frame.height);
        Self {
            config,
            view: Affine::IDENTITY,
            frame,
            points: Vec::new(),
            index: QuadTree::build_with_capacity(&[], config.capacity),
            next_id: 0,
            mouse: None,
            hover: HoverState::new(),
            dragging: None,
            marker_hover: None,
            marker_drag: None,
            converter: calibration.converter(),
            calibration,
            pending_clear: None,
            dirty: true,
        }
    }

    // --- accessors -------------------------------------------------------------------

    /// Configuration in use.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replace the debug overlays.
    pub fn set_debug(&mut self, debug: DebugFlags) {
        self.config.debug = debug;
        self.dirty = true;
    }

    /// Points in creation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Look up a point by id.
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// The spatial index over the current points.
    pub fn index(&self) -> &QuadTree {
        &self.index
    }

    /// Cursor position in content space, while the pointer is over the canvas.
    pub fn mouse_point(&self) -> Option<&Point> {
        self.mouse.as_ref()
    }

    /// The point under the cursor.
    pub fn hovered(&self) -> Option<PointId> {
        self.hover.current()
    }

    /// The point being dragged.
    pub fn dragging(&self) -> Option<PointId> {
        self.dragging
    }

    /// The calibration marker under the cursor.
    pub fn hovered_marker(&self) -> Option<AxisKey> {
        self.marker_hover
    }

    /// The calibration marker being dragged.
    pub fn dragging_marker(&self) -> Option<AxisKey> {
        self.marker_drag
    }

    /// Whether [`Controller::undo_clear`] would restore anything.
    pub fn can_undo_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    /// Whether anything changed since the last [`Controller::take_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and reset the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    // --- view ------------------------------------------------------------------------

    /// The content→screen transform supplied by the pan/zoom collaborator.
    pub fn view_transform(&self) -> Affine {
        self.view
    }

    /// Replace the content→screen transform.
    pub fn set_view_transform(&mut self, view: Affine) {
        self.view = view;
        self.dirty = true;
    }

    /// Pixel size of the loaded image.
    pub fn image_size(&self) -> Size {
        self.frame
    }

    /// Adopt a new image size and reset the calibration to its default framing.
    pub fn set_image_size(&mut self, size: Size) {
        self.frame = size;
        self.set_calibration(Calibration::for_image(size.width, size.height));
    }

    fn zoom_scale(&self) -> f64 {
        self.view.as_coeffs()[0]
    }

    /// Hit radius in content space.
    pub fn hit_radius(&self) -> f64 {
        let scale = self.zoom_scale();
        let scale = if scale < 0.0 { -scale } else { scale };
        if scale > 0.0 && scale.is_finite() {
            self.config.hit_radius_px / scale
        } else {
            self.config.hit_radius_px
        }
    }

    fn screen_to_content(&self, screen: ScreenPoint) -> Option<ScreenPoint> {
        let det = self.view.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(self.view.inverse() * screen)
    }

    // --- calibration -----------------------------------------------------------------

    /// Current calibration.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Converter for the current calibration.
    pub fn converter(&self) -> CoordsConverter {
        self.converter
    }

    /// Replace the whole calibration.
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.calibration = calibration;
        self.calibration_changed();
    }

    /// Move the pixel position of one reference.
    pub fn set_calibration_pixel(&mut self, key: AxisKey, pixel: f64) {
        self.calibration.set_pixel(key, pixel);
        self.calibration_changed();
    }

    /// Change the data value of one reference.
    pub fn set_calibration_value(&mut self, key: AxisKey, value: f64) {
        self.calibration.set_value(key, value);
        self.calibration_changed();
    }

    fn calibration_changed(&mut self) {
        self.converter = self.calibration.converter();
        self.dirty = true;
    }

    /// Export rows in creation order using the current converter.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        let converter = self.converter;
        self.points.iter().map(move |point| Row {
            point,
            data: converter.convert(point),
        })
    }

    // --- pointer events --------------------------------------------------------------

    /// Track the pointer at `screen` and recompute hover.
    ///
    /// Does nothing when the view transform is not invertible.
    pub fn pointer_move(&mut self, screen: ScreenPoint) -> Vec<HoverEvent<PointId>> {
        let Some(content) = self.screen_to_content(screen) else {
            return Vec::new();
        };
        self.mouse = Some(Point::cursor(content.x, content.y));
        if let Some(key) = self.marker_drag {
            self.calibration.set_pixel(key, dragged_pixel(key, content));
            self.calibration_changed();
        }
        if self.dragging.is_some() || self.config.debug.contains(DebugFlags::CURSOR) {
            self.dirty = true;
        }
        self.refresh_hover()
    }

    /// React to a button press at the current cursor.
    ///
    /// Over a point: secondary deletes it, primary starts dragging it. Elsewhere, primary
    /// grabs a calibration handle under the cursor or creates a point at the cursor.
    ///
    /// A primary press away from any point creates one even while a point drag is still
    /// active (its release happened off the canvas); the drag stays active.
    pub fn pointer_down(&mut self, button: PointerButton) -> Option<Action> {
        if self.marker_drag.is_some() {
            return None;
        }
        match (self.hover.current(), button) {
            (Some(id), PointerButton::Secondary) => {
                self.delete_point(id).then_some(Action::Deleted(id))
            }
            (Some(id), PointerButton::Primary) => {
                self.dragging = Some(id);
                self.dirty = true;
                log_debug!(id = id.get(), "drag started");
                Some(Action::DragStarted(id))
            }
            (None, PointerButton::Primary) => {
                if let Some(key) = self.marker_hover {
                    self.marker_drag = Some(key);
                    self.dirty = true;
                    log_debug!(key = key.as_str(), "calibration marker drag started");
                    return Some(Action::MarkerDragStarted(key));
                }
                let (x, y) = self.mouse.as_ref().map(|m| (m.x, m.y))?;
                Some(Action::Created(self.create_point(x, y)))
            }
            _ => None,
        }
    }

    /// React to a button release. Only the primary button has an effect.
    ///
    /// Ends a marker drag, or ends a point drag by moving the point to the cursor. A drag
    /// released with no cursor over the canvas is cancelled and the point stays put.
    pub fn pointer_up(&mut self, button: PointerButton) -> Option<Action> {
        if button != PointerButton::Primary {
            return None;
        }
        if let Some(key) = self.marker_drag.take() {
            self.dirty = true;
            log_info!(
                key = key.as_str(),
                pixel = self.calibration.reference(key).pixel,
                "calibration marker moved"
            );
            return Some(Action::MarkerDragEnded(key));
        }
        let id = self.dragging.take()?;
        self.dirty = true;
        let moved = match self.mouse.as_ref().map(|m| (m.x, m.y)) {
            Some((x, y)) => self.move_point(id, x, y),
            None => false,
        };
        if moved {
            Some(Action::Moved(id))
        } else {
            log_debug!(id = id.get(), "drag cancelled");
            Some(Action::DragCancelled(id))
        }
    }

    /// The pointer left the canvas. Active drags stay active.
    pub fn pointer_leave(&mut self) -> Vec<HoverEvent<PointId>> {
        self.mouse = None;
        self.marker_hover = None;
        self.dirty = true;
        self.hover.clear()
    }

    fn refresh_hover(&mut self) -> Vec<HoverEvent<PointId>> {
        let hovered = self.hit_test();
        let marker_hover = match (&self.mouse, hovered) {
            (Some(m), None) if self.config.markers => marker_at(
                &self.calibration,
                self.frame,
                to_kurbo_point(m),
                self.hit_radius(),
            ),
            _ => None,
        };
        if marker_hover != self.marker_hover {
            self.marker_hover = marker_hover;
            self.dirty = true;
        }
        let events = self.hover.update(hovered);
        if !events.is_empty() {
            self.dirty = true;
        }
        events
    }

    fn hit_test(&self) -> Option<PointId> {
        let mouse = self.mouse.as_ref()?;
        let dragging = self.dragging;
        let candidates = self
            .index
            .query_radius(mouse, self.hit_radius())
            .into_iter()
            .filter(|p| Some(p.id) != dragging);
        mouse.nearest(candidates).map(|p| p.id)
    }

    // --- mutations -------------------------------------------------------------------

    /// Append a point at content position `(x, y)`.
    pub fn create_point(&mut self, x: f64, y: f64) -> PointId {
        self.next_id += 1;
        let id = PointId::new(self.next_id);
        self.points.push(Point::new(id, x, y));
        log_debug!(id = id.get(), x, y, "point created");
        self.commit();
        id
    }

    /// Delete a point. Unknown ids are ignored.
    pub fn delete_point(&mut self, id: PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        if self.points.len() == before {
            return false;
        }
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        log_debug!(id = id.get(), "point deleted");
        self.commit();
        true
    }

    /// Move a point, keeping its id. Unknown ids are ignored.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        point.x = x;
        point.y = y;
        log_debug!(id = id.get(), x, y, "point moved");
        self.commit();
        true
    }

    /// Set or clear a point's label. Unknown ids are ignored.
    pub fn set_label(&mut self, id: PointId, label: Option<String>) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        point.label = label;
        self.commit();
        true
    }

    /// Remove every point, keeping them as a one-shot undo snapshot. Returns how many
    /// points were removed.
    pub fn clear_all(&mut self) -> usize {
        let snapshot = core::mem::take(&mut self.points);
        let count = snapshot.len();
        self.dragging = None;
        self.commit();
        self.pending_clear = Some(snapshot);
        log_info!(count, "points cleared");
        count
    }

    /// Restore the points removed by the last [`Controller::clear_all`].
    ///
    /// Works once, and only if no other mutation happened since the clear.
    pub fn undo_clear(&mut self) -> bool {
        let Some(snapshot) = self.pending_clear.take() else {
            return false;
        };
        log_info!(count = snapshot.len(), "clear undone");
        self.points = snapshot;
        self.commit();
        true
    }

    fn commit(&mut self) {
        self.pending_clear = None;
        self.index = QuadTree::build_with_capacity(&self.points, self.config.capacity);
        self.dirty = true;
        let _ = self.refresh_hover();
    }

    // --- painting --------------------------------------------------------------------

    /// Describe the current state to `surface`.
    ///
    /// Order: quad-tree boundaries (debug), the cursor (debug), every point except the one
    /// being dragged, the drag preview at the cursor, then the calibration handles.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let debug = self.config.debug;
        if debug.contains(DebugFlags::QUAD_TREE) {
            for rect in self.index.boundaries() {
                surface.boundary(to_kurbo_rect(rect));
            }
        }
        if debug.contains(DebugFlags::CURSOR)
            && let Some(mouse) = &self.mouse
        {
            let label = mouse.display_label();
            surface.marker(to_kurbo_point(mouse), MarkerStyle::Cursor, Some(label.as_str()));
        }

        let hovered = self.hover.current();
        for point in &self.points {
            if Some(point.id) == self.dragging {
                continue;
            }
            let style = if Some(point.id) == hovered {
                MarkerStyle::Hovered
            } else {
                MarkerStyle::Normal
            };
            let fallback;
            let label = match &point.label {
                Some(label) => Some(label.as_str()),
                None if debug.contains(DebugFlags::LABELS) => {
                    fallback = point.display_label();
                    Some(fallback.as_str())
                }
                None => None,
            };
            surface.marker(to_kurbo_point(point), style, label);
        }

        if self.dragging.is_some()
            && let Some(mouse) = &self.mouse
        {
            surface.marker(to_kurbo_point(mouse), MarkerStyle::Dragging, None);
        }

        if self.config.markers {
            for key in AxisKey::ALL {
                let active = self.marker_drag == Some(key) || self.marker_hover == Some(key);
                let at = handle_position(&self.calibration, key, self.frame);
                surface.calibration_handle(key, at, active);
            }
        }
    }
}
