//! Gesture tool for canvas interactions.
//!
//! Translates a single-pointer stream into `TabletMutation` commands that
//! are applied by the `CanvasSession`.
//!
//! ## Gesture outcomes
//!
//! | Press lands on | Pointer travel | Release does |
//! |----------------|----------------|--------------|
//! | a tablet | ≤ tap threshold | split at the press point |
//! | a tablet | > tap threshold | bring the dragged tablet to top |
//! | empty canvas | ≤ tap threshold | split at the press point |
//! | empty canvas | > tap threshold | add the drawn tablet |
//!
//! Travel is measured per axis from the press point and, once exceeded,
//! stays exceeded for the rest of the gesture.

use crate::input::{PointerEvent, PointerPhase};
use crate::session::TabletMutation;
use tablet_core::constants::{
    DEFAULT_BORDER_RADIUS, MIN_TABLET_HEIGHT, MIN_TABLET_WIDTH, TAP_THRESHOLD,
};
use tablet_core::{NewTablet, Point, Rect, SplitLines, Tablet, TabletId, rect_from_drag};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Drawing a new tablet from `start` toward `current`.
    Drawing { start: Point, current: Point },
    /// Moving tablet `id`, which sat at `origin` when pressed at `press`.
    Dragging {
        id: TabletId,
        press: Point,
        origin: Point,
    },
}

pub struct GestureTool {
    gesture: Gesture,
    /// Pointer travelled past the tap threshold during this gesture.
    moved: bool,
    /// Rubber-band rectangle shown while drawing.
    preview: Option<Rect>,
}

impl Default for GestureTool {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTool {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            moved: false,
            preview: None,
        }
    }

    pub fn preview(&self) -> Option<Rect> {
        self.preview
    }

    /// Tablet currently being dragged, for highlight rendering.
    pub fn dragged_id(&self) -> Option<TabletId> {
        match self.gesture {
            Gesture::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Handle an input event, returning zero or more mutations.
    ///
    /// `hit` is the topmost tablet under the pointer; only consulted on
    /// `Start`.
    pub fn handle(&mut self, event: &PointerEvent, hit: Option<&Tablet>) -> Vec<TabletMutation> {
        let p = event.position();
        match event.phase {
            PointerPhase::Start => {
                self.reset();
                match hit {
                    Some(tablet) => {
                        self.gesture = Gesture::Dragging {
                            id: tablet.id,
                            press: p,
                            origin: Point::new(tablet.x, tablet.y),
                        };
                    }
                    None => {
                        self.gesture = Gesture::Drawing {
                            start: p,
                            current: p,
                        };
                        self.preview = Some(Rect::new(p.x, p.y, MIN_TABLET_WIDTH, MIN_TABLET_HEIGHT));
                    }
                }
                vec![]
            }
            PointerPhase::Move => self.on_move(p),
            PointerPhase::End => self.on_end(),
            PointerPhase::Cancel => {
                if self.is_active() {
                    log::debug!("gesture cancelled");
                }
                self.reset();
                vec![]
            }
        }
    }

    fn on_move(&mut self, p: Point) -> Vec<TabletMutation> {
        let press = match self.gesture {
            Gesture::Idle => return vec![],
            Gesture::Drawing { start, .. } => start,
            Gesture::Dragging { press, .. } => press,
        };

        if (p.x - press.x).abs() > TAP_THRESHOLD || (p.y - press.y).abs() > TAP_THRESHOLD {
            self.moved = true;
        }

        match &mut self.gesture {
            Gesture::Idle => vec![],
            Gesture::Drawing { start, current } => {
                *current = p;
                let rect = rect_from_drag(*start, p);
                log::trace!("preview {rect:?}");
                self.preview = Some(rect);
                vec![]
            }
            Gesture::Dragging { id, press, origin } => {
                let x = (origin.x + p.x - press.x).max(0.0);
                let y = (origin.y + p.y - press.y).max(0.0);
                log::trace!("drag {id} to ({x}, {y})");
                vec![TabletMutation::Move { id: *id, x, y }]
            }
        }
    }

    fn on_end(&mut self) -> Vec<TabletMutation> {
        let gesture = self.gesture;
        let moved = self.moved;
        self.reset();

        let press = match gesture {
            Gesture::Idle => return vec![],
            Gesture::Drawing { start, .. } => start,
            Gesture::Dragging { press, .. } => press,
        };

        if !moved {
            log::debug!("tap at ({}, {})", press.x, press.y);
            return vec![TabletMutation::SplitAll(SplitLines::at(press))];
        }

        match gesture {
            Gesture::Drawing { start, current } => {
                let rect = rect_from_drag(start, current);
                vec![TabletMutation::Add(NewTablet {
                    border_radius: Some(DEFAULT_BORDER_RADIUS),
                    ..NewTablet::from(rect)
                })]
            }
            Gesture::Dragging { id, .. } => vec![TabletMutation::BringToTop { id }],
            Gesture::Idle => vec![],
        }
    }

    fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.moved = false;
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablet_core::Color;

    fn tablet_at(x: f32, y: f32) -> Tablet {
        Tablet {
            id: TabletId::intern("tool_target"),
            x,
            y,
            width: 100.0,
            height: 60.0,
            color: Color::rgb(0xA9, 0xDF, 0xBF),
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }

    #[test]
    fn press_on_empty_canvas_shows_minimum_preview() {
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(30.0, 40.0, 0.0), None);
        assert_eq!(tool.preview(), Some(Rect::new(30.0, 40.0, 40.0, 20.0)));
        assert_eq!(tool.dragged_id(), None);
    }

    #[test]
    fn draw_gesture_adds_tablet() {
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(10.0, 10.0, 0.0), None);
        tool.handle(&PointerEvent::moved(60.0, 50.0, 16.0), None);
        assert_eq!(tool.preview(), Some(Rect::new(10.0, 10.0, 50.0, 40.0)));

        let out = tool.handle(&PointerEvent::end(60.0, 50.0, 32.0), None);
        assert_eq!(
            out,
            vec![TabletMutation::Add(NewTablet {
                x: 10.0,
                y: 10.0,
                width: 50.0,
                height: 40.0,
                border_radius: Some(DEFAULT_BORDER_RADIUS),
            })]
        );
        assert_eq!(tool.preview(), None);
        assert!(!tool.is_active());
    }

    #[test]
    fn tap_on_empty_canvas_splits_instead_of_adding() {
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(50.0, 50.0, 0.0), None);
        tool.handle(&PointerEvent::moved(55.0, 58.0, 16.0), None);
        let out = tool.handle(&PointerEvent::end(55.0, 58.0, 32.0), None);
        assert_eq!(
            out,
            vec![TabletMutation::SplitAll(SplitLines::at(Point::new(50.0, 50.0)))]
        );
    }

    #[test]
    fn drag_moves_relative_to_press_and_clamps() {
        let target = tablet_at(20.0, 20.0);
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(30.0, 30.0, 0.0), Some(&target));
        assert_eq!(tool.dragged_id(), Some(target.id));

        let out = tool.handle(&PointerEvent::moved(80.0, 45.0, 16.0), None);
        assert_eq!(
            out,
            vec![TabletMutation::Move {
                id: target.id,
                x: 70.0,
                y: 35.0,
            }]
        );

        let out = tool.handle(&PointerEvent::moved(0.0, 0.0, 32.0), None);
        assert_eq!(
            out,
            vec![TabletMutation::Move {
                id: target.id,
                x: 0.0,
                y: 0.0,
            }]
        );

        let out = tool.handle(&PointerEvent::end(0.0, 0.0, 48.0), None);
        assert_eq!(out, vec![TabletMutation::BringToTop { id: target.id }]);
    }

    #[test]
    fn travel_past_threshold_is_sticky() {
        let target = tablet_at(0.0, 0.0);
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(50.0, 30.0, 0.0), Some(&target));
        tool.handle(&PointerEvent::moved(70.0, 30.0, 16.0), None);
        // Back to the press point: still a drag, not a tap.
        tool.handle(&PointerEvent::moved(50.0, 30.0, 32.0), None);
        let out = tool.handle(&PointerEvent::end(50.0, 30.0, 48.0), None);
        assert_eq!(out, vec![TabletMutation::BringToTop { id: target.id }]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(0.0, 0.0, 0.0), None);
        tool.handle(&PointerEvent::moved(10.0, 10.0, 16.0), None);
        let out = tool.handle(&PointerEvent::end(10.0, 10.0, 32.0), None);
        assert!(matches!(out.as_slice(), [TabletMutation::SplitAll(_)]));
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut tool = GestureTool::new();
        tool.handle(&PointerEvent::start(10.0, 10.0, 0.0), None);
        tool.handle(&PointerEvent::moved(200.0, 200.0, 16.0), None);
        let out = tool.handle(&PointerEvent::cancel(200.0, 200.0, 32.0), None);
        assert!(out.is_empty());
        assert_eq!(tool.preview(), None);
        // A stray release after cancel does nothing.
        assert!(tool.handle(&PointerEvent::end(200.0, 200.0, 48.0), None).is_empty());
    }

    #[test]
    fn events_without_press_are_ignored() {
        let mut tool = GestureTool::new();
        assert!(tool.handle(&PointerEvent::moved(5.0, 5.0, 0.0), None).is_empty());
        assert!(tool.handle(&PointerEvent::end(5.0, 5.0, 0.0), None).is_empty());
    }
}
