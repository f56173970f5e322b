#![forbid(unsafe_code)]

//! Damped spring used as the default panel transition.
//!
//! Motion follows the damped harmonic oscillator
//!
//!   a = -stiffness × (position - target) - damping × velocity
//!
//! integrated with semi-implicit Euler in fixed 4ms sub-steps.
//!
//! # Parameters
//!
//! Panels are usually tuned in *tension/friction* terms ([`SpringConfig`]).
//! These map to physical parameters as
//!
//! - stiffness = (tension - 30) × 3.62 + 194
//! - damping   = (friction - 8) × 3 + 25
//!
//! so the default `tension = 40, friction = 8` yields a slightly underdamped
//! spring (stiffness 230.2, damping 25) with a small settle bounce.
//!
//! # Invariants
//!
//! 1. [`Spring::retarget`] keeps the current velocity, so an interrupted
//!    transition bends toward the new target instead of restarting.
//! 2. Once at rest, the position equals the target exactly and velocity is 0.
//! 3. Stiffness is at least [`MIN_STIFFNESS`]; damping is non-negative.
//!
//! # Failure Modes
//!
//! - Zero damping never settles; `is_at_rest()` stays `false`.

use std::time::Duration;

/// Maximum integration step in seconds.
const MAX_STEP_SECS: f64 = 0.004;

/// Displacement below which the spring may come to rest.
const REST_DISPLACEMENT: f64 = 0.001;

/// Speed below which the spring may come to rest.
const REST_SPEED: f64 = 0.001;

/// Lower bound on stiffness.
pub const MIN_STIFFNESS: f64 = 0.1;

/// Tension/friction tuning for the default panel spring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SpringConfig {
    /// Higher tension pulls harder toward the target.
    pub tension: f64,
    /// Higher friction bleeds velocity faster.
    pub friction: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 40.0,
            friction: 8.0,
        }
    }
}

impl SpringConfig {
    /// Physical stiffness for this tuning.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        ((self.tension - 30.0) * 3.62 + 194.0).max(MIN_STIFFNESS)
    }

    /// Physical damping for this tuning.
    #[must_use]
    pub fn damping(&self) -> f64 {
        ((self.friction - 8.0) * 3.0 + 25.0).max(0.0)
    }
}

/// A damped spring moving a scalar toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring at `position`, heading for `target`, tuned by `config`.
    #[must_use]
    pub fn new(position: f64, target: f64, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness: config.stiffness(),
            damping: config.damping(),
            at_rest: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Point the spring at a new target, keeping position and velocity.
    pub fn retarget(&mut self, target: f64, config: SpringConfig) {
        self.target = target;
        self.stiffness = config.stiffness();
        self.damping = config.damping();
        self.at_rest = false;
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance by `dt`, sub-stepping for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            self.step(step);
            remaining -= step;
        }

        if (self.position - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}
