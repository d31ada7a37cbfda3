//! Split-line indicator: the dashed crosshair shown under the pointer.
//!
//! The lines appear as soon as a gesture starts and follow the pointer.
//! When the gesture ends they linger for `SPLIT_LINE_HIDE_DELAY_MS`, then
//! disappear on the next `tick`. Showing the lines again always cancels a
//! pending hide, so a quick follow-up gesture is never blanked by the
//! previous one's timer.

use tablet_core::SplitLines;
use tablet_core::constants::SPLIT_LINE_HIDE_DELAY_MS;

#[derive(Debug, Clone, Default)]
pub struct SplitIndicator {
    lines: Option<SplitLines>,
    hide_at: Option<f64>,
}

impl SplitIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines to draw, if any.
    pub fn lines(&self) -> Option<SplitLines> {
        self.lines
    }

    /// Show (or move) the lines. Returns whether anything visible changed.
    pub fn show(&mut self, lines: SplitLines) -> bool {
        self.hide_at = None;
        let changed = self.lines != Some(lines);
        self.lines = Some(lines);
        changed
    }

    /// Arm the delayed hide relative to `now_ms`.
    pub fn schedule_hide(&mut self, now_ms: f64) {
        if self.lines.is_some() {
            self.hide_at = Some(now_ms + SPLIT_LINE_HIDE_DELAY_MS);
        }
    }

    /// Advance the clock. Returns `true` if the lines were hidden.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.hide_at {
            Some(deadline) if now_ms >= deadline => {
                self.lines = None;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }
}
