#![forbid(unsafe_code)]

//! Scripted gesture sequences.
//!
//! A [`GestureScript`] is an ordered list of [`GestureEvent`]s that can be
//! replayed against a [`SidePanel`], returning the outcome of every message.
//!
//! ```rust,ignore
//! let outcomes = GestureScript::swipe(80.0, 4).run(&mut panel);
//! assert_eq!(outcomes.last(), Some(&GestureOutcome::Settled(Resolution::Open)));
//! ```

use sidemenu_core::{GestureEvent, GestureOutcome, GestureSample, SidePanel};

/// An ordered gesture sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureScript {
    events: Vec<GestureEvent>,
}

impl GestureScript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Touch down.
    #[must_use]
    pub fn start(mut self) -> Self {
        self.events.push(GestureEvent::Start);
        self
    }

    /// Move to `(dx, dy)` relative to the touch-down point.
    #[must_use]
    pub fn move_to(mut self, dx: f64, dy: f64) -> Self {
        self.events
            .push(GestureEvent::Move(GestureSample::new(dx, dy)));
        self
    }

    /// Lift at `(dx, dy)` relative to the touch-down point.
    #[must_use]
    pub fn release_at(mut self, dx: f64, dy: f64) -> Self {
        self.events
            .push(GestureEvent::Release(GestureSample::new(dx, dy)));
        self
    }

    /// Start, pass through every `dx` on the path horizontally, release on the
    /// last one (or at 0 for an empty path).
    #[must_use]
    pub fn drag(path: &[f64]) -> Self {
        let mut script = Self::new().start();
        for &dx in path {
            script = script.move_to(dx, 0.0);
        }
        let end = path.last().copied().unwrap_or(0.0);
        script.release_at(end, 0.0)
    }

    /// A horizontal swipe to `dx` in `steps` evenly spaced moves.
    #[must_use]
    pub fn swipe(dx: f64, steps: usize) -> Self {
        let steps = steps.max(1);
        let path: Vec<f64> = (1..=steps)
            .map(|i| dx * i as f64 / steps as f64)
            .collect();
        Self::drag(&path)
    }

    /// Append another script.
    #[must_use]
    pub fn then(mut self, other: Self) -> Self {
        self.events.extend(other.events);
        self
    }

    #[must_use]
    pub fn events(&self) -> &[GestureEvent] {
        &self.events
    }

    /// Replay every event against `panel`.
    pub fn run(&self, panel: &mut SidePanel) -> Vec<GestureOutcome> {
        self.events
            .iter()
            .map(|&event| panel.handle_gesture(event))
            .collect()
    }
}
