#![forbid(unsafe_code)]

//! Animation bridge: the live offset handle and the pluggable strategy that
//! moves it.
//!
//! The panel never waits on an animation. [`PanelAnimator::transition`]
//! starts (or retargets) a transition and returns; the host advances time by
//! calling [`AnimatedValue::tick`] once per frame and reads the result back
//! through [`PanelAnimator::style_for`].
//!
//! # Invariants
//!
//! 1. [`AnimatedValue::set_value`] cancels any in-flight transition.
//! 2. Starting a transition while another is running retargets it in place.
//! 3. When a transition settles, [`AnimatedValue::get`] equals its target.

pub mod spring;

use std::time::Duration;

pub use spring::{Spring, SpringConfig};

/// The live horizontal offset of the content view.
#[derive(Debug, Clone, Default)]
pub struct AnimatedValue {
    value: f64,
    spring: Option<Spring>,
}

impl AnimatedValue {
    /// A value at rest at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            spring: None,
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Where the value is heading: the in-flight target, or the value itself
    /// when at rest.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.spring.as_ref().map_or(self.value, Spring::target)
    }

    /// Whether a transition is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Set the value directly, stopping any transition.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.spring = None;
    }

    /// Jump to `target` without animating.
    pub fn jump_to(&mut self, target: f64) {
        self.set_value(target);
    }

    /// Spring toward `target`, retargeting an in-flight transition.
    pub fn animate_to(&mut self, target: f64, config: SpringConfig) {
        match self.spring.as_mut() {
            Some(spring) => spring.retarget(target, config),
            None if self.value == target => {}
            None => self.spring = Some(Spring::new(self.value, target, config)),
        }
    }

    /// Advance the in-flight transition by `dt`.
    ///
    /// Returns `true` while the value is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };
        spring.advance(dt);
        self.value = spring.position();
        if spring.is_at_rest() {
            self.spring = None;
            #[cfg(feature = "tracing")]
            tracing::trace!(value = self.value, "transition settled");
            return false;
        }
        true
    }
}

/// Visual mapping from the live offset to the content view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentTransform {
    /// Horizontal translation of the content view.
    pub translate_x: f64,
}

impl ContentTransform {
    #[must_use]
    pub const fn translate_x(translate_x: f64) -> Self {
        Self { translate_x }
    }
}

/// Strategy for animating the panel and mapping its offset to visuals.
pub trait PanelAnimator {
    /// Start (or retarget) a transition of `value` toward `target`.
    ///
    /// Must return immediately; progress happens on [`AnimatedValue::tick`].
    fn transition(&mut self, value: &mut AnimatedValue, target: f64);

    /// Visual mapping for the current value. Defaults to a plain horizontal
    /// translation.
    fn style_for(&self, value: &AnimatedValue) -> ContentTransform {
        ContentTransform::translate_x(value.get())
    }
}

/// Default animator: spring toward the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringAnimator {
    config: SpringConfig,
}

impl SpringAnimator {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }
}

impl PanelAnimator for SpringAnimator {
    fn transition(&mut self, value: &mut AnimatedValue, target: f64) {
        value.animate_to(target, self.config);
    }
}

/// Reduced-motion animator: snaps straight to the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimator;

impl PanelAnimator for ImmediateAnimator {
    fn transition(&mut self, value: &mut AnimatedValue, target: f64) {
        value.jump_to(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn run(value: &mut AnimatedValue) -> usize {
        let mut frames = 0;
        while value.tick(MS_16) {
            frames += 1;
            assert!(frames < 1000, "transition never settled");
        }
        frames
    }

    #[test]
    fn animate_then_settle() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(200.0, SpringConfig::default());
        assert!(v.is_animating());
        assert_eq!(v.target(), 200.0);
        assert!(run(&mut v) > 0);
        assert!(!v.is_animating());
        assert_eq!(v.get(), 200.0);
    }

    #[test]
    fn set_value_cancels_transition() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(200.0, SpringConfig::default());
        v.tick(MS_16);
        v.set_value(42.0);
        assert!(!v.is_animating());
        assert_eq!(v.get(), 42.0);
        assert!(!v.tick(MS_16));
        assert_eq!(v.get(), 42.0);
    }

    #[test]
    fn retarget_mid_flight() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(200.0, SpringConfig::default());
        for _ in 0..5 {
            v.tick(MS_16);
        }
        let mid = v.get();
        assert!(mid > 0.0 && mid < 200.0);
        v.animate_to(-50.0, SpringConfig::default());
        assert_eq!(v.target(), -50.0);
        assert_eq!(v.get(), mid);
        run(&mut v);
        assert_eq!(v.get(), -50.0);
    }

    #[test]
    fn animate_to_current_value_at_rest_is_noop() {
        let mut v = AnimatedValue::new(10.0);
        v.animate_to(10.0, SpringConfig::default());
        assert!(!v.is_animating());
    }

    #[test]
    fn tick_without_transition() {
        let mut v = AnimatedValue::new(3.0);
        assert!(!v.tick(MS_16));
        assert_eq!(v.get(), 3.0);
    }

    #[test]
    fn immediate_animator_jumps() {
        let mut v = AnimatedValue::new(0.0);
        let mut animator = ImmediateAnimator;
        animator.transition(&mut v, -200.0);
        assert!(!v.is_animating());
        assert_eq!(v.get(), -200.0);
        assert_eq!(
            animator.style_for(&v),
            ContentTransform::translate_x(-200.0)
        );
    }

    #[test]
    fn spring_animator_starts_transition() {
        let mut v = AnimatedValue::new(0.0);
        let mut animator = SpringAnimator::default();
        animator.transition(&mut v, 200.0);
        assert!(v.is_animating());
        assert_eq!(v.get(), 0.0);
        assert_eq!(animator.style_for(&v).translate_x, 0.0);
    }
}
