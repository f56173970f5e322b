#![forbid(unsafe_code)]

//! Frame-loop drivers.

use std::time::Duration;

use sidemenu_core::SidePanel;

/// Default frame period (~60fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// Frame cap used by [`settle`] before giving up.
pub const MAX_FRAMES: usize = 2_000;

/// Tick `panel` until its transition settles. Returns the number of frames
/// that were still moving, or `None` if it never settled within
/// [`MAX_FRAMES`].
pub fn settle(panel: &mut SidePanel) -> Option<usize> {
    for frame in 0..MAX_FRAMES {
        if !panel.tick(FRAME) {
            return Some(frame);
        }
    }
    None
}

/// Offsets sampled once per frame while a transition runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameTrace {
    pub offsets: Vec<f64>,
}

impl FrameTrace {
    /// Tick until settled (or [`MAX_FRAMES`]), sampling the raw offset after
    /// every frame.
    pub fn record(panel: &mut SidePanel) -> Self {
        let mut offsets = Vec::new();
        for _ in 0..MAX_FRAMES {
            let moving = panel.tick(FRAME);
            offsets.push(panel.current_offset());
            if !moving {
                break;
            }
        }
        Self { offsets }
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.offsets.last().copied()
    }

    /// Largest logical excursion past `target` in the direction of travel
    /// given by `multiplier`.
    #[must_use]
    pub fn overshoot(&self, target: f64, multiplier: f64) -> f64 {
        self.offsets
            .iter()
            .map(|&o| multiplier * (o - target))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use sidemenu_core::{ImmediateAnimator, PanelConfig};

    use super::*;

    #[test]
    fn settle_counts_moving_frames() {
        let mut panel = SidePanel::new(300.0, PanelConfig::default());
        assert_eq!(settle(&mut panel), Some(0));
        panel.open();
        let frames = settle(&mut panel).expect("spring settles");
        assert!(frames > 10);
        assert_eq!(panel.current_offset(), 200.0);
    }

    #[test]
    fn immediate_has_nothing_to_trace() {
        let mut panel =
            SidePanel::new(300.0, PanelConfig::default()).with_animator(ImmediateAnimator);
        panel.open();
        let trace = FrameTrace::record(&mut panel);
        assert_eq!(trace.offsets, vec![200.0]);
    }

    #[test]
    fn trace_ends_on_target() {
        let mut panel = SidePanel::new(300.0, PanelConfig::default());
        panel.open();
        let trace = FrameTrace::record(&mut panel);
        assert_eq!(trace.last(), Some(200.0));
        assert!(trace.overshoot(200.0, 1.0) < 20.0);
    }
}
