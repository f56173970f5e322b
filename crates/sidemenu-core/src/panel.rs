#![forbid(unsafe_code)]

//! The side panel state machine.
//!
//! [`SidePanel`] owns the [`PanelState`] record and wires the classifier,
//! tracker, resolver and animator together. Hosts feed it gesture messages
//! and menu actions from their single UI thread and call [`SidePanel::tick`]
//! once per frame.
//!
//! # State Machine
//!
//! ```text
//!            open() / release past barrier
//!   Closed ───────────────────────────────▶ Open
//!      ▲                                     │
//!      └─────────────────────────────────────┘
//!            close() / release at or below barrier / overlay tap
//! ```
//!
//! # Invariants
//!
//! 1. `is_open` only changes inside [`SidePanel::open`] and
//!    [`SidePanel::close`].
//! 2. Repeating `open()` or `close()` re-issues the transition and anchor
//!    update but never re-fires `on_change`.
//! 3. `on_change` receives the new state, exactly once per change, before
//!    the call returns.
//! 4. The anchor is moved to the settle target immediately, not when the
//!    transition finishes. A drag begun mid-transition anchors on the target.
//!
//! # Failure Modes
//!
//! - An imperative `open()`/`close()` during a captured drag wins at once;
//!   further moves of that drag keep tracking against the new anchor.
//! - Panics in host callbacks propagate to the caller.

use std::fmt;
use std::time::Duration;

use crate::animation::{ContentTransform, PanelAnimator, SpringAnimator};
use crate::config::PanelConfig;
use crate::geometry::{Geometry, MenuPosition};
use crate::gesture::{GestureEvent, GestureLock, GestureSample, should_capture};
use crate::resolver::{Resolution, resolve_release};
use crate::state::PanelState;
use crate::tracker::track_move;

/// Imperative control exposed to the menu and content subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Open,
    Close,
    Toggle,
}

/// What a gesture message did to the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The message was not for this panel (rejected start, uncaptured
    /// release, or a move of a rejected gesture).
    Ignored,
    /// The start was accepted; moves will be classified.
    Claimed,
    /// A move was classified and not captured.
    NotCaptured,
    /// A captured move updated the live offset.
    Tracked { offset: f64 },
    /// A captured move would cross the closed bound and was held.
    Clamped,
    /// A captured gesture was released and the panel settled.
    Settled(Resolution),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Session {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Gesture started, waiting for a move that passes the classifier.
    Pending,
    /// Start-capture predicate refused this gesture.
    Rejected,
    /// Horizontal pan captured; moves go straight to the tracker.
    Captured,
}

/// A draggable side panel.
pub struct SidePanel {
    config: PanelConfig,
    viewport_width: f64,
    geometry: Geometry,
    state: PanelState,
    animator: Box<dyn PanelAnimator>,
    on_change: Option<Box<dyn FnMut(bool)>>,
    gesture_lock: GestureLock,
    start_capture: Option<Box<dyn Fn() -> bool>>,
    session: Session,
}

impl fmt::Debug for SidePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidePanel")
            .field("position", &self.config.menu_position)
            .field("is_open", &self.state.is_open())
            .field("offset", &self.state.current_offset())
            .field("anchor", &self.state.anchor_offset())
            .field("session", &self.session)
            .finish()
    }
}

impl SidePanel {
    /// Create a closed panel for a viewport `viewport_width` units wide.
    ///
    /// The default animator is a [`SpringAnimator`] tuned by
    /// `config.spring`.
    #[must_use]
    pub fn new(viewport_width: f64, config: PanelConfig) -> Self {
        Self {
            geometry: config.geometry(viewport_width),
            animator: Box::new(SpringAnimator::new(config.spring)),
            gesture_lock: GestureLock::from_disabled(config.disable_gestures),
            config,
            viewport_width,
            state: PanelState::new(),
            on_change: None,
            start_capture: None,
            session: Session::Idle,
        }
    }

    /// Replace the animation strategy.
    #[must_use]
    pub fn with_animator(mut self, animator: impl PanelAnimator + 'static) -> Self {
        self.animator = Box::new(animator);
        self
    }

    /// Callback invoked with the new state on every actual open/close change.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Disable gestures whenever `disabled` returns `true`. Evaluated on every
    /// capture check; overrides `config.disable_gestures`.
    #[must_use]
    pub fn disable_gestures_when(mut self, disabled: impl Fn() -> bool + 'static) -> Self {
        self.gesture_lock = GestureLock::When(Box::new(disabled));
        self
    }

    /// Gate whether the panel may claim a gesture at all.
    #[must_use]
    pub fn with_start_capture(mut self, allow: impl Fn() -> bool + 'static) -> Self {
        self.start_capture = Some(Box::new(allow));
        self
    }

    /// Replace the gesture lock at runtime.
    pub fn set_gesture_lock(&mut self, lock: GestureLock) {
        self.gesture_lock = lock;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn menu_position(&self) -> MenuPosition {
        self.config.menu_position
    }

    #[inline]
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Raw live offset of the content view.
    #[inline]
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.state.current_offset()
    }

    /// Live offset in logical units (positive = more open).
    #[must_use]
    pub fn logical_offset(&self) -> f64 {
        self.config.menu_position.logical(self.state.current_offset())
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.current().is_animating()
    }

    /// Whether a captured drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session == Session::Captured
    }

    /// Visual mapping of the content view for the renderer.
    #[must_use]
    pub fn content_transform(&self) -> ContentTransform {
        self.animator.style_for(self.state.current())
    }

    /// Whether the tap-to-close overlay should be shown over the content.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.config.touch_to_close && self.state.is_open()
    }

    // -----------------------------------------------------------------------
    // Menu actions
    // -----------------------------------------------------------------------

    /// Settle open.
    pub fn open(&mut self) {
        self.settle(true);
    }

    /// Settle closed.
    pub fn close(&mut self) {
        self.settle(false);
    }

    /// `close()` when open, `open()` when closed.
    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Run a [`MenuAction`].
    pub fn dispatch(&mut self, action: MenuAction) {
        match action {
            MenuAction::Open => self.open(),
            MenuAction::Close => self.close(),
            MenuAction::Toggle => self.toggle(),
        }
    }

    /// Handle a tap on the overlay. Closes the panel and returns `true` when
    /// the overlay is showing; otherwise does nothing.
    pub fn tap_overlay(&mut self) -> bool {
        if !self.overlay_visible() {
            return false;
        }
        self.close();
        true
    }

    fn settle(&mut self, open: bool) {
        let magnitude = if open {
            self.geometry.open_offset
        } else {
            self.geometry.hidden_offset
        };
        let target = self.config.menu_position.raw(magnitude);

        self.animator.transition(self.state.current_mut(), target);
        self.state.set_anchor(target);

        let was_open = self.state.is_open();
        let changed = self.state.set_open(open);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target_offset = target,
            was_open,
            is_open = open,
            version = self.state.version(),
            "panel settle"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = was_open;

        if changed && let Some(on_change) = self.on_change.as_mut() {
            on_change(open);
        }
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Whether the panel may claim a new gesture.
    #[must_use]
    pub fn should_claim_gesture(&self) -> bool {
        self.start_capture.as_ref().is_none_or(|allow| allow())
    }

    /// Classify a move of a not-yet-captured gesture.
    #[must_use]
    pub fn should_capture_move(&self, sample: GestureSample) -> bool {
        should_capture(sample, &self.geometry, &self.gesture_lock)
    }

    /// Track a captured move. Returns the new live offset when applied.
    pub fn drag_move(&mut self, sample: GestureSample) -> Option<f64> {
        track_move(&mut self.state, sample, self.config.menu_position)
    }

    /// Resolve a released drag and settle accordingly.
    pub fn drag_release(&mut self, sample: GestureSample) -> Resolution {
        let resolution = resolve_release(
            self.state.anchor_offset(),
            sample,
            self.config.menu_position,
            self.geometry.capture_barrier,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dx = sample.dx,
            anchor = self.state.anchor_offset(),
            barrier = self.geometry.capture_barrier,
            ?resolution,
            "drag released"
        );

        match resolution {
            Resolution::Open => self.open(),
            Resolution::Closed => self.close(),
        }
        resolution
    }

    /// Route one gesture message through the capture/track/release pipeline.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        match event {
            GestureEvent::Start => {
                if self.should_claim_gesture() {
                    self.session = Session::Pending;
                    GestureOutcome::Claimed
                } else {
                    self.session = Session::Rejected;
                    GestureOutcome::Ignored
                }
            }
            GestureEvent::Move(sample) => match self.session {
                Session::Rejected => GestureOutcome::Ignored,
                Session::Captured => self.tracked(sample),
                Session::Idle | Session::Pending => {
                    if !self.should_capture_move(sample) {
                        self.session = Session::Pending;
                        return GestureOutcome::NotCaptured;
                    }
                    self.session = Session::Captured;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(dx = sample.dx, dy = sample.dy, "drag captured");
                    self.tracked(sample)
                }
            },
            GestureEvent::Release(sample) => {
                let session = std::mem::take(&mut self.session);
                if session == Session::Captured {
                    GestureOutcome::Settled(self.drag_release(sample))
                } else {
                    GestureOutcome::Ignored
                }
            }
        }
    }

    fn tracked(&mut self, sample: GestureSample) -> GestureOutcome {
        match self.drag_move(sample) {
            Some(offset) => GestureOutcome::Tracked { offset },
            None => GestureOutcome::Clamped,
        }
    }

    // -----------------------------------------------------------------------
    // Frame loop & layout
    // -----------------------------------------------------------------------

    /// Advance any running transition by `dt`. Returns `true` while moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.state.tick(dt)
    }

    /// Recompute derived thresholds for a new viewport width.
    ///
    /// Explicit offset overrides are kept. An open panel re-settles on the
    /// new open target without notifying.
    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.geometry = self.config.geometry(viewport_width);
        #[cfg(feature = "tracing")]
        tracing::debug!(viewport_width, geometry = ?self.geometry, "viewport resized");
        if self.state.is_open() {
            self.open();
        }
    }
}
