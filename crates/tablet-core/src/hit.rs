//! Hit testing: point → tablet lookup.
//!
//! Walks the ordered collection back-to-front (last painted = topmost) so the
//! result matches visual stacking rather than insertion order.

use crate::geometry::point_in_rect;
use crate::model::{Point, Tablet};

/// Find the topmost tablet containing `p`.
/// Returns `None` if the point is over empty canvas.
pub fn find_topmost_at(p: Point, tablets: &[Tablet]) -> Option<&Tablet> {
    tablets.iter().rev().find(|t| point_in_rect(p, &t.rect()))
}
