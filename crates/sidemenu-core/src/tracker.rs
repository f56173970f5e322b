#![forbid(unsafe_code)]

//! Converts a captured drag into the live panel offset.
//!
//! Offsets are absolute: each move computes `anchor + dx` from the anchor
//! recorded at the last settle, so rounding error never accumulates across
//! events.
//!
//! # Invariants
//!
//! 1. A candidate whose logical offset is negative (past the closed bound) is
//!    not applied; the live offset stays where it was.
//! 2. The check runs per sample, so reversing direction back in bounds
//!    resumes tracking immediately.
//! 3. No bound on the open side.

use crate::geometry::MenuPosition;
use crate::gesture::GestureSample;
use crate::state::PanelState;

/// The offset a move would produce, or `None` if it would cross the closed
/// bound.
#[must_use]
pub fn drag_offset(anchor: f64, sample: GestureSample, position: MenuPosition) -> Option<f64> {
    let candidate = anchor + sample.dx;
    (position.logical(candidate) >= 0.0).then_some(candidate)
}

/// Apply a captured move to `state`. Returns the new live offset when it was
/// applied.
pub fn track_move(
    state: &mut PanelState,
    sample: GestureSample,
    position: MenuPosition,
) -> Option<f64> {
    let applied = drag_offset(state.anchor_offset(), sample, position);
    match applied {
        Some(offset) => {
            state.set_current_offset(offset);
            #[cfg(feature = "tracing")]
            tracing::trace!(dx = sample.dx, offset, "drag applied");
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                dx = sample.dx,
                held = state.current_offset(),
                "drag past closed bound ignored"
            );
        }
    }
    applied
}
