// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped canvas session: ties a [`Controller`] to the host's render loop.
//!
//! The host (a render loop plus whatever resize subscription the canvas needs) is attached
//! when the session starts and detached when it is dropped, on every exit path.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::controller::Controller;
use crate::paint::Surface;

/// The embedding that drives a canvas: frame scheduling, resize notifications.
pub trait CanvasHost {
    /// Start delivering frames and resize events.
    fn attach(&mut self);
    /// Stop delivering frames and resize events.
    fn detach(&mut self);
}

/// A live digitizing session. Detaches its host on drop.
///
/// ```
/// use digitizer_interaction::{CanvasHost, CanvasSession, Controller};
///
/// #[derive(Default)]
/// struct Loop { running: bool }
/// impl CanvasHost for Loop {
///     fn attach(&mut self) { self.running = true; }
///     fn detach(&mut self) { self.running = false; }
/// }
///
/// let mut host = Loop::default();
/// {
///     let mut session = CanvasSession::new(&mut host, Controller::default());
///     session.create_point(3.0, 4.0);
///     assert_eq!(session.points().len(), 1);
/// }
/// assert!(!host.running);
/// ```
pub struct CanvasSession<'h, H: CanvasHost> {
    host: &'h mut H,
    controller: Controller,
}

impl<'h, H: CanvasHost> CanvasSession<'h, H> {
    /// Attach `host` and start a session around `controller`.
    pub fn new(host: &'h mut H, controller: Controller) -> Self {
        host.attach();
        Self { host, controller }
    }

    /// Paint into `surface` if anything changed since the last frame. Returns whether it painted.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.controller.take_dirty() {
            return false;
        }
        self.controller.paint(surface);
        true
    }
}

impl<H: CanvasHost> Deref for CanvasSession<'_, H> {
    type Target = Controller;

    fn deref(&self) -> &Controller {
        &self.controller
    }
}

impl<H: CanvasHost> DerefMut for CanvasSession<'_, H> {
    fn deref_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }
}

impl<H: CanvasHost> Drop for CanvasSession<'_, H> {
    fn drop(&mut self) {
        self.host.detach();
    }
}

impl<H: CanvasHost> fmt::Debug for CanvasSession<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasSession")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
