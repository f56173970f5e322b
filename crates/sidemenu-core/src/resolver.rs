#![forbid(unsafe_code)]

//! Release decision: does a finished drag leave the panel open or closed?
//!
//! The decision looks only at the logical offset the drag ends on
//! (`anchor + dx`) against the capture barrier. It does not matter which
//! state the drag started from, so the same threshold governs opening and
//! closing gestures.

use crate::geometry::MenuPosition;
use crate::gesture::GestureSample;

/// Where a released drag settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Open,
    Closed,
}

impl Resolution {
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Resolve a completed drag. Strictly above `barrier` opens; at or below
/// closes.
#[must_use]
pub fn resolve_release(
    anchor: f64,
    sample: GestureSample,
    position: MenuPosition,
    barrier: f64,
) -> Resolution {
    let logical = position.logical(anchor + sample.dx);
    if logical > barrier {
        Resolution::Open
    } else {
        Resolution::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARRIER: f64 = 75.0;

    #[test]
    fn past_barrier_opens() {
        let r = resolve_release(
            0.0,
            GestureSample::horizontal(80.0),
            MenuPosition::Left,
            BARRIER,
        );
        assert_eq!(r, Resolution::Open);
        assert!(r.is_open());
    }

    #[test]
    fn at_or_below_barrier_closes() {
        for dx in [70.0, 75.0, 0.0, -40.0] {
            assert_eq!(
                resolve_release(
                    0.0,
                    GestureSample::horizontal(dx),
                    MenuPosition::Left,
                    BARRIER
                ),
                Resolution::Closed,
                "dx = {dx}"
            );
        }
    }

    #[test]
    fn right_side_uses_logical_offset() {
        assert_eq!(
            resolve_release(
                0.0,
                GestureSample::horizontal(-80.0),
                MenuPosition::Right,
                BARRIER
            ),
            Resolution::Open
        );
        assert_eq!(
            resolve_release(
                0.0,
                GestureSample::horizontal(80.0),
                MenuPosition::Right,
                BARRIER
            ),
            Resolution::Closed
        );
    }

    #[test]
    fn closing_from_open_uses_same_barrier() {
        // Open at 200; dragging back 120 ends at 80 > 75, stays open.
        assert_eq!(
            resolve_release(
                200.0,
                GestureSample::horizontal(-120.0),
                MenuPosition::Left,
                BARRIER
            ),
            Resolution::Open
        );
        // Dragging back 130 ends at 70, closes.
        assert_eq!(
            resolve_release(
                200.0,
                GestureSample::horizontal(-130.0),
                MenuPosition::Left,
                BARRIER
            ),
            Resolution::Closed
        );
        assert_eq!(
            resolve_release(
                -200.0,
                GestureSample::horizontal(130.0),
                MenuPosition::Right,
                BARRIER
            ),
            Resolution::Closed
        );
    }

    #[test]
    fn ignores_vertical_travel() {
        assert_eq!(
            resolve_release(
                0.0,
                GestureSample::new(80.0, 400.0),
                MenuPosition::Left,
                BARRIER
            ),
            Resolution::Open
        );
    }
}
