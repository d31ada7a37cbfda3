//! Geometry primitives: point containment and drag → rectangle.

use crate::constants::{MIN_TABLET_HEIGHT, MIN_TABLET_WIDTH};
use crate::model::{Point, Rect};

/// Inclusive containment test on all four edges.
pub fn point_in_rect(p: Point, r: &Rect) -> bool {
    r.contains(p)
}

/// Bounding box of a drag from `start` to `current`, grown to the
/// minimum tablet size.
///
/// When an axis had to grow and the drag went in the negative direction on
/// that axis, the origin is pulled back from `start` (clamped to 0) so the
/// box stays anchored at the press point. Otherwise the box grows toward
/// positive coordinates from the smaller of the two points.
pub fn rect_from_drag(start: Point, current: Point) -> Rect {
    let (x, width) = axis_extent(start.x, current.x, MIN_TABLET_WIDTH);
    let (y, height) = axis_extent(start.y, current.y, MIN_TABLET_HEIGHT);
    Rect::new(x, y, width, height)
}

/// Origin and length along one axis.
fn axis_extent(start: f32, current: f32, min_len: f32) -> (f32, f32) {
    let lo = start.min(current);
    let span = start.max(current) - lo;
    if span >= min_len {
        return (lo, span);
    }
    let origin = if current < start {
        (start - min_len).max(0.0)
    } else {
        lo
    };
    (origin, min_len)
}
