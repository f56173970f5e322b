#![forbid(unsafe_code)]

//! Gesture samples, gesture messages, and the capture classifier.
//!
//! The platform delivers discrete [`GestureEvent`]s carrying a
//! [`GestureSample`] (deltas since the touch went down). Before a gesture is
//! captured, every move is run through [`should_capture`]; once it returns
//! `true` the rest of the gesture is routed to the offset tracker without
//! asking again.
//!
//! # Invariants
//!
//! 1. Capture requires gestures to be enabled, `round(|dx|) > tolerance_x`
//!    and `round(|dy|) < tolerance_y`.
//! 2. [`should_capture`] has no side effects beyond evaluating the
//!    [`GestureLock`] predicate.
//!
//! # Failure Modes
//!
//! - A [`GestureLock::When`] predicate that panics propagates the panic.

use std::fmt;

use crate::geometry::Geometry;

/// Horizontal/vertical travel since the start of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
}

impl GestureSample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Purely horizontal sample.
    #[must_use]
    pub const fn horizontal(dx: f64) -> Self {
        Self { dx, dy: 0.0 }
    }
}

/// A gesture message delivered by the platform.
///
/// Every gesture is `Start`, zero or more `Move`, then exactly one `Release`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Touch went down.
    Start,
    /// Touch moved; deltas are relative to the start position.
    Move(GestureSample),
    /// Touch lifted; final deltas relative to the start position.
    Release(GestureSample),
}

/// Whether gestures are currently disabled.
///
/// The predicate form is evaluated on every capture check so hosts can lock
/// the panel based on live state (e.g. while a modal is showing).
#[derive(Default)]
pub enum GestureLock {
    /// Gestures always allowed.
    #[default]
    Unlocked,
    /// Gestures never allowed.
    Locked,
    /// Gestures disabled whenever the predicate returns `true`.
    When(Box<dyn Fn() -> bool>),
}

impl GestureLock {
    /// Build from the plain boolean form of `disable_gestures`.
    #[must_use]
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled { Self::Locked } else { Self::Unlocked }
    }

    /// Evaluate the lock now.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        match self {
            Self::Unlocked => true,
            Self::Locked => false,
            Self::When(disabled) => !disabled(),
        }
    }
}

impl fmt::Debug for GestureLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlocked => f.write_str("Unlocked"),
            Self::Locked => f.write_str("Locked"),
            Self::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

/// Decide whether a move should be captured as a horizontal pan.
///
/// Deltas are rounded to whole units before comparison so sub-pixel jitter
/// cannot trigger capture.
#[must_use]
pub fn should_capture(sample: GestureSample, geometry: &Geometry, lock: &GestureLock) -> bool {
    if !lock.gestures_enabled() {
        return false;
    }
    let x = sample.dx.abs().round();
    let y = sample.dy.abs().round();
    x > geometry.tolerance_x && y < geometry.tolerance_y
}
