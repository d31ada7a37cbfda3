//! Split engine: subdivides rectangles along a vertical and/or horizontal line.
//!
//! ## Policy
//!
//! A split along one axis is all-or-nothing. Each side loses half of
//! [`SPLIT_GAP`] to the gap, and the split is committed only if **both**
//! remaining parts meet the minimum part size for that axis. Otherwise the
//! rectangle is returned whole.
//!
//! | left/top valid | right/bottom valid | result |
//! |----------------|--------------------|--------|
//! | yes | yes | two parts, separated by the gap |
//! | yes | no  | original, unchanged |
//! | no  | yes | original, unchanged |
//! | no  | no  | original, unchanged |
//!
//! With both lines the vertical split runs first, then every resulting part
//! is evaluated for the horizontal split on its own.

use crate::constants::{MIN_PART_HEIGHT, MIN_PART_WIDTH, SPLIT_GAP};
use crate::id::TabletId;
use crate::model::{Rect, SplitLines, Tablet};
use smallvec::{SmallVec, smallvec};

/// Up to four parts; never spills to the heap.
pub type Parts<T> = SmallVec<[T; 4]>;

// ─── Intersection ────────────────────────────────────────────────────────

/// `x` lies strictly inside the rectangle's horizontal span.
/// A line exactly on an edge does not intersect.
pub fn intersects_vertical(r: &Rect, x: f32) -> bool {
    x > r.x && x < r.right()
}

/// `y` lies strictly inside the rectangle's vertical span.
pub fn intersects_horizontal(r: &Rect, y: f32) -> bool {
    y > r.y && y < r.bottom()
}

/// Either present line crosses the rectangle.
pub fn intersects(r: &Rect, lines: &SplitLines) -> bool {
    let vertical = lines.x.is_some_and(|x| intersects_vertical(r, x));
    let horizontal = lines.y.is_some_and(|y| intersects_horizontal(r, y));
    vertical || horizontal
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Split at `x` into a left and right part, or return `r` unchanged.
pub fn split_vertical(r: &Rect, x: f32) -> Parts<Rect> {
    match cut_axis(r.x, r.width, x, MIN_PART_WIDTH) {
        Some(((lx, lw), (rx, rw))) => smallvec![
            Rect::new(lx, r.y, lw, r.height),
            Rect::new(rx, r.y, rw, r.height),
        ],
        None => smallvec![*r],
    }
}

/// Split at `y` into a top and bottom part, or return `r` unchanged.
pub fn split_horizontal(r: &Rect, y: f32) -> Parts<Rect> {
    match cut_axis(r.y, r.height, y, MIN_PART_HEIGHT) {
        Some(((ty, th), (by, bh))) => smallvec![
            Rect::new(r.x, ty, r.width, th),
            Rect::new(r.x, by, r.width, bh),
        ],
        None => smallvec![*r],
    }
}

/// Vertical first, then horizontal on each vertical part independently.
pub fn split_both(r: &Rect, x: f32, y: f32) -> Parts<Rect> {
    split_vertical(r, x)
        .iter()
        .flat_map(|part| split_horizontal(part, y))
        .collect()
}

/// Dispatch on which lines are present.
pub fn split_rect(r: &Rect, lines: &SplitLines) -> Parts<Rect> {
    match (lines.x, lines.y) {
        (Some(x), Some(y)) => split_both(r, x, y),
        (Some(x), None) => split_vertical(r, x),
        (None, Some(y)) => split_horizontal(r, y),
        (None, None) => smallvec![*r],
    }
}

/// Cut the span `[start, start + len]` at `at`.
/// Returns `(origin, length)` for both sides, or `None` if either side would
/// drop below `min_part` after giving up half the gap.
fn cut_axis(start: f32, len: f32, at: f32, min_part: f32) -> Option<((f32, f32), (f32, f32))> {
    let half_gap = SPLIT_GAP / 2.0;
    let near = at - start;
    let far = (start + len) - at;

    let near_valid = near - half_gap >= min_part;
    let far_valid = far - half_gap >= min_part;
    if !(near_valid && far_valid) {
        return None;
    }
    Some(((start, near - half_gap), (at + half_gap, far - half_gap)))
}

// ─── Tablets ─────────────────────────────────────────────────────────────

/// Split a tablet along `lines`.
///
/// When the geometry doesn't change the original tablet comes back as-is,
/// id included. Otherwise every part gets a fresh id and inherits the
/// parent's color and corner radius.
pub fn split_tablet(tablet: &Tablet, lines: &SplitLines) -> Parts<Tablet> {
    let rects = split_rect(&tablet.rect(), lines);
    if rects.len() == 1 {
        return smallvec![tablet.clone()];
    }
    rects
        .into_iter()
        .map(|r| tablet.with_rect(TabletId::split_part(), r))
        .collect()
}
