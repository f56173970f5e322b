// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: gesture-to-offset state machine for a draggable side panel.
//!
//! # Role in sidemenu
//! `sidemenu-core` holds everything that has invariants: the viewport-derived
//! thresholds, the capture classifier, the offset tracker, the release
//! resolver, and the [`SidePanel`] state machine that ties them to an
//! animation strategy. Rendering and platform gesture plumbing stay with the
//! host.
//!
//! # Primary responsibilities
//! - **Geometry**: open offset, hidden offset, capture barrier, tolerances.
//! - **Gesture classification**: when a touch becomes a horizontal pan.
//! - **Tracking**: absolute, closed-bound-clamped live offset during a drag.
//! - **Release resolution**: open vs closed against the barrier.
//! - **SidePanel**: open/close/toggle, change notification, overlay, frames.
//!
//! # How it fits in the system
//! The host forwards gesture messages ([`GestureEvent`]) and menu actions
//! ([`MenuAction`]) from its UI thread, calls [`SidePanel::tick`] each frame,
//! and reads [`SidePanel::content_transform`] when drawing. Nothing here
//! blocks or spawns.

pub mod animation;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod panel;
pub mod resolver;
pub mod state;
pub mod tracker;

pub use animation::{
    AnimatedValue, ContentTransform, ImmediateAnimator, PanelAnimator, SpringAnimator,
    SpringConfig,
};
pub use config::{ConfigError, PanelConfig};
pub use geometry::{Geometry, MenuPosition};
pub use gesture::{GestureEvent, GestureLock, GestureSample};
pub use panel::{GestureOutcome, MenuAction, SidePanel};
pub use resolver::Resolution;
pub use state::PanelState;
