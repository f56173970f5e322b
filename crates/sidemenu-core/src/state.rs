#![forbid(unsafe_code)]

//! The panel's single mutable record.
//!
//! [`PanelState`] is owned by [`SidePanel`](crate::panel::SidePanel) and lent
//! by reference to the tracker and resolver. Every mutation goes through a
//! method here and bumps [`PanelState::version`], so hosts can cheaply tell
//! whether anything changed since they last rendered.

use std::time::Duration;

use crate::animation::AnimatedValue;

/// Open/closed state, live offset, and drag anchor.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    is_open: bool,
    current: AnimatedValue,
    anchor_offset: f64,
    version: u64,
}

impl PanelState {
    /// Closed, at offset 0, anchored at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Raw live offset of the content view.
    #[inline]
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.current.get()
    }

    /// Raw offset that drag deltas are measured from.
    #[inline]
    #[must_use]
    pub fn anchor_offset(&self) -> f64 {
        self.anchor_offset
    }

    /// Monotonic mutation counter.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The live offset handle.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &AnimatedValue {
        &self.current
    }

    /// Mutable access to the live offset handle for animators.
    pub(crate) fn current_mut(&mut self) -> &mut AnimatedValue {
        self.version += 1;
        &mut self.current
    }

    /// Advance an in-flight transition; returns `true` while still moving.
    pub(crate) fn tick(&mut self, dt: Duration) -> bool {
        if !self.current.is_animating() {
            return false;
        }
        self.version += 1;
        self.current.tick(dt)
    }

    pub(crate) fn set_current_offset(&mut self, offset: f64) {
        self.current.set_value(offset);
        self.version += 1;
    }

    pub(crate) fn set_anchor(&mut self, anchor: f64) {
        self.anchor_offset = anchor;
        self.version += 1;
    }

    /// Record the open flag; returns `true` when it actually changed.
    pub(crate) fn set_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        self.version += 1;
        true
    }
}
