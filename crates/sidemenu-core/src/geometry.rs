#![forbid(unsafe_code)]

//! Mount side and the viewport-derived thresholds that drive every offset
//! computation.
//!
//! All offsets in this crate are horizontal translations of the content view
//! in logical units. The *logical offset* is the raw offset multiplied by the
//! mount side's [`MenuPosition::multiplier`], so that larger logical values
//! always mean "more open" regardless of which edge the menu sits on.
//!
//! # Defaults
//!
//! | Threshold | Default |
//! |-----------|---------|
//! | open offset | 2/3 of viewport width |
//! | hidden offset | 0 |
//! | capture barrier | 1/4 of viewport width |
//! | tolerance x / y | 10 |

/// Default horizontal/vertical capture tolerance in logical units.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Which edge of the viewport the menu is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum MenuPosition {
    /// Menu on the left edge; content slides right to open.
    #[default]
    Left,
    /// Menu on the right edge; content slides left to open.
    Right,
}

impl MenuPosition {
    /// Sign convention for offsets: `+1.0` for [`Left`](Self::Left),
    /// `-1.0` for [`Right`](Self::Right).
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Convert a raw offset into a logical offset (positive = more open).
    #[inline]
    #[must_use]
    pub fn logical(self, raw: f64) -> f64 {
        self.multiplier() * raw
    }

    /// Convert a logical magnitude into the raw offset stored on the value.
    #[inline]
    #[must_use]
    pub fn raw(self, logical: f64) -> f64 {
        self.multiplier() * logical
    }
}

/// Derived, read-only thresholds.
///
/// Magnitudes are stored unsigned (logical); callers apply the mount side's
/// multiplier when producing raw offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Logical offset of the fully open panel.
    pub open_offset: f64,
    /// Logical offset of the closed panel.
    pub hidden_offset: f64,
    /// Release threshold: logical offsets strictly above this resolve open.
    pub capture_barrier: f64,
    /// Horizontal travel (rounded) that must be exceeded before capture.
    pub tolerance_x: f64,
    /// Vertical travel (rounded) that must stay below this for capture.
    pub tolerance_y: f64,
}

impl Geometry {
    /// Thresholds derived from `viewport_width` with default tolerances and
    /// no overrides.
    #[must_use]
    pub fn from_viewport(viewport_width: f64) -> Self {
        Self {
            open_offset: viewport_width * 2.0 / 3.0,
            hidden_offset: 0.0,
            capture_barrier: viewport_width / 4.0,
            tolerance_x: DEFAULT_TOLERANCE,
            tolerance_y: DEFAULT_TOLERANCE,
        }
    }

    /// Override the open offset. Any value is accepted as-is.
    #[must_use]
    pub fn with_open_offset(mut self, open_offset: f64) -> Self {
        self.open_offset = open_offset;
        self
    }

    /// Override the hidden offset. Any value is accepted as-is.
    #[must_use]
    pub fn with_hidden_offset(mut self, hidden_offset: f64) -> Self {
        self.hidden_offset = hidden_offset;
        self
    }

    /// Override both capture tolerances.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance_x: f64, tolerance_y: f64) -> Self {
        self.tolerance_x = tolerance_x;
        self.tolerance_y = tolerance_y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_sign() {
        assert_eq!(MenuPosition::Left.multiplier(), 1.0);
        assert_eq!(MenuPosition::Right.multiplier(), -1.0);
        assert_eq!(MenuPosition::default(), MenuPosition::Left);
    }

    #[test]
    fn logical_and_raw_are_inverse() {
        for pos in [MenuPosition::Left, MenuPosition::Right] {
            assert_eq!(pos.logical(pos.raw(42.0)), 42.0);
        }
        assert_eq!(MenuPosition::Right.raw(200.0), -200.0);
    }

    #[test]
    fn viewport_300_thresholds() {
        let g = Geometry::from_viewport(300.0);
        assert_eq!(g.open_offset, 200.0);
        assert_eq!(g.hidden_offset, 0.0);
        assert_eq!(g.capture_barrier, 75.0);
        assert_eq!(g.tolerance_x, 10.0);
        assert_eq!(g.tolerance_y, 10.0);
    }

    #[test]
    fn overrides_accept_zero_and_negative() {
        let g = Geometry::from_viewport(300.0)
            .with_open_offset(0.0)
            .with_hidden_offset(-5.0)
            .with_tolerance(0.0, -1.0);
        assert_eq!(g.open_offset, 0.0);
        assert_eq!(g.hidden_offset, -5.0);
        assert_eq!(g.tolerance_x, 0.0);
        assert_eq!(g.tolerance_y, -1.0);
        // Barrier is always derived.
        assert_eq!(g.capture_barrier, 75.0);
    }
}
