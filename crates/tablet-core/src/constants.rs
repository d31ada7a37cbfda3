//! Fixed canvas constants. All lengths are in canvas units (dpi).

/// Minimum width of a freshly drawn tablet.
pub const MIN_TABLET_WIDTH: f32 = 40.0;

/// Minimum height of a freshly drawn tablet.
pub const MIN_TABLET_HEIGHT: f32 = 20.0;

/// Minimum width of each part produced by a vertical split.
pub const MIN_PART_WIDTH: f32 = 20.0;

/// Minimum height of each part produced by a horizontal split.
pub const MIN_PART_HEIGHT: f32 = 10.0;

/// Visual gap between the two parts of a split, centered on the line.
pub const SPLIT_GAP: f32 = 4.0;

/// Pointer travel (per axis) beyond which a press is a drag, not a tap.
pub const TAP_THRESHOLD: f32 = 10.0;

/// Corner radius given to tablets that don't specify one.
pub const DEFAULT_BORDER_RADIUS: f32 = 12.0;

/// Delay before the split-line indicator disappears after a gesture ends.
pub const SPLIT_LINE_HIDE_DELAY_MS: f64 = 300.0;
