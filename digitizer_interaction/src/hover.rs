// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions when the hovered target changes.
//!
//! ## Minimal example
//!
//! ```
//! use digitizer_interaction::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(2)]);
//! ```

use alloc::vec::Vec;

/// Tracks the single hovered target.
///
/// When updated with a new target it reports the leave of the old one first, then the
/// enter of the new one. Updating with the current target reports nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// A hover transition event, returned by [`HoverState::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given target.
    Enter(K),
    /// Pointer leaves the given target.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The hovered target, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Clear the hovered target, returning its leave event if there was one.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update(None)
    }

    /// Replace the hovered target and return the transitions.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        let mut out = Vec::new();
        if self.current == next {
            return out;
        }
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = next {
            out.push(HoverEvent::Enter(new));
        }
        self.current = next;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn hover_enter_from_empty() {
        let mut h: HoverState<u32> = HoverState::new();
        assert_eq!(h.update(Some(3)), vec![HoverEvent::Enter(3)]);
        assert_eq!(h.current(), Some(3));
    }

    // Switching targets: leave before enter.
    #[test]
    fn hover_switch_target() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(1));
        assert_eq!(
            h.update(Some(4)),
            vec![HoverEvent::Leave(1), HoverEvent::Enter(4)]
        );
    }

    #[test]
    fn hover_same_target_no_events() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(7));
        assert!(h.update(Some(7)).is_empty());
        assert!(HoverState::<u32>::new().update(None).is_empty());
    }

    #[test]
    fn hover_clear_leaves() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(2));
        assert_eq!(h.clear(), vec![HoverEvent::Leave(2)]);
        assert_eq!(h.current(), None);
    }
}
