#![forbid(unsafe_code)]

//! Recorders for the panel's outward effects.
//!
//! Both recorders hand out a cheap clone that shares its log, so one half can
//! be moved into the panel while the test keeps the other.
//!
//! ```rust,ignore
//! let changes = ChangeRecorder::new();
//! let animator = RecordingAnimator::new();
//! let mut panel = SidePanel::new(300.0, PanelConfig::default())
//!     .with_on_change(changes.callback())
//!     .with_animator(animator.clone());
//! panel.close();
//! assert!(changes.is_empty());
//! assert_eq!(animator.targets(), vec![0.0]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sidemenu_core::animation::{AnimatedValue, ContentTransform, ImmediateAnimator, PanelAnimator};

/// Records every `on_change` notification in order.
#[derive(Debug, Clone, Default)]
pub struct ChangeRecorder {
    log: Rc<RefCell<Vec<bool>>>,
}

impl ChangeRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback suitable for `SidePanel::with_on_change`.
    pub fn callback(&self) -> impl FnMut(bool) + 'static {
        let log = Rc::clone(&self.log);
        move |open| log.borrow_mut().push(open)
    }

    /// Notifications received so far.
    #[must_use]
    pub fn changes(&self) -> Vec<bool> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Number of notifications carrying `open`.
    #[must_use]
    pub fn count(&self, open: bool) -> usize {
        self.log.borrow().iter().filter(|&&v| v == open).count()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

/// One call to [`PanelAnimator::transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Live value when the transition was requested.
    pub from: f64,
    /// Requested target.
    pub target: f64,
}

/// Animator that logs every transition, then delegates to `inner`.
///
/// Defaults to [`ImmediateAnimator`] so assertions can read settled offsets
/// without ticking.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator<A = ImmediateAnimator> {
    inner: A,
    log: Rc<RefCell<Vec<Transition>>>,
}

impl RecordingAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: PanelAnimator> RecordingAnimator<A> {
    /// Record around an arbitrary animator.
    #[must_use]
    pub fn wrapping(inner: A) -> Self {
        Self {
            inner,
            log: Rc::default(),
        }
    }

    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn targets(&self) -> Vec<f64> {
        self.log.borrow().iter().map(|t| t.target).collect()
    }

    #[must_use]
    pub fn last_target(&self) -> Option<f64> {
        self.log.borrow().last().map(|t| t.target)
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl<A: PanelAnimator> PanelAnimator for RecordingAnimator<A> {
    fn transition(&mut self, value: &mut AnimatedValue, target: f64) {
        tracing::trace!(from = value.get(), target, "recorded transition");
        self.log.borrow_mut().push(Transition {
            from: value.get(),
            target,
        });
        self.inner.transition(value, target);
    }

    fn style_for(&self, value: &AnimatedValue) -> ContentTransform {
        self.inner.style_for(value)
    }
}
