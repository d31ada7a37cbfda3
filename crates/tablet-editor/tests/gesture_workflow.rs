//! Integration tests: pointer gestures driving the tablet store
//! (tablet-editor ↔ tablet-core).

use pretty_assertions::assert_eq;
use tablet_core::constants::{DEFAULT_BORDER_RADIUS, SPLIT_LINE_HIDE_DELAY_MS};
use tablet_core::{Point, Rect, SplitLines, TabletStore};
use tablet_editor::{CanvasSession, PointerEvent};

fn session() -> CanvasSession {
    CanvasSession::new(TabletStore::with_seed(0x7AB1E7))
}

/// Press, move through `path`, release at the last point.
fn gesture(session: &mut CanvasSession, from: (f32, f32), path: &[(f32, f32)], t0: f64) {
    session.handle(&PointerEvent::start(from.0, from.1, t0));
    let mut last = from;
    for (i, &(x, y)) in path.iter().enumerate() {
        session.handle(&PointerEvent::moved(x, y, t0 + 16.0 * (i + 1) as f64));
        last = (x, y);
    }
    session.handle(&PointerEvent::end(last.0, last.1, t0 + 16.0 * (path.len() + 1) as f64));
}

fn rects(session: &CanvasSession) -> Vec<Rect> {
    session.tablets().iter().map(|t| t.rect()).collect()
}

// ─── Drawing ────────────────────────────────────────────────────────────

#[test]
fn drag_on_empty_canvas_creates_tablet() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(50.0, 50.0), (100.0, 100.0)], 0.0);

    assert_eq!(rects(&s), vec![Rect::new(0.0, 0.0, 100.0, 100.0)]);
    assert_eq!(s.tablets()[0].border_radius, DEFAULT_BORDER_RADIUS);
    assert_eq!(s.preview(), None);
}

#[test]
fn preview_tracks_drag_until_release() {
    let mut s = session();
    s.handle(&PointerEvent::start(200.0, 200.0, 0.0));
    s.handle(&PointerEvent::moved(150.0, 190.0, 16.0));
    assert_eq!(s.preview(), Some(Rect::new(150.0, 180.0, 50.0, 20.0)));
    assert!(s.tablets().is_empty());
}

#[test]
fn new_tablets_get_distinct_colors() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    gesture(&mut s, (200.0, 0.0), &[(300.0, 100.0)], 1000.0);
    gesture(&mut s, (400.0, 0.0), &[(500.0, 100.0)], 2000.0);

    let colors: Vec<String> = s.tablets().iter().map(|t| t.color.to_hex()).collect();
    assert_eq!(colors.len(), 3);
    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[1], colors[2]);
    assert_ne!(colors[0], colors[2]);
}

// ─── Tapping ────────────────────────────────────────────────────────────

#[test]
fn tap_splits_every_crossed_tablet() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    gesture(&mut s, (0.0, 200.0), &[(100.0, 300.0)], 1000.0);

    // Vertical line at x=50 crosses both; horizontal at y=50 only the first.
    gesture(&mut s, (50.0, 50.0), &[], 2000.0);

    let mut got = rects(&s);
    got.sort_by(|a, b| (a.y, a.x).partial_cmp(&(b.y, b.x)).unwrap());
    assert_eq!(
        got,
        vec![
            Rect::new(0.0, 0.0, 48.0, 48.0),
            Rect::new(52.0, 0.0, 48.0, 48.0),
            Rect::new(0.0, 52.0, 48.0, 48.0),
            Rect::new(52.0, 52.0, 48.0, 48.0),
            Rect::new(0.0, 200.0, 48.0, 100.0),
            Rect::new(52.0, 200.0, 48.0, 100.0),
        ]
    );
}

#[test]
fn tap_on_empty_area_far_from_tablets_changes_nothing() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    let before = s.tablets().to_vec();
    let revision = s.store().revision();

    gesture(&mut s, (500.0, 500.0), &[(503.0, 502.0)], 1000.0);

    assert_eq!(s.tablets(), before.as_slice());
    assert_eq!(s.store().revision(), revision);
}

#[test]
fn jittery_tap_still_splits_at_press_point() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    gesture(&mut s, (150.0, 50.0), &[(154.0, 47.0), (158.0, 55.0)], 1000.0);

    // Only the horizontal line at y=50 crosses the tablet.
    assert_eq!(
        rects(&s),
        vec![
            Rect::new(0.0, 0.0, 100.0, 48.0),
            Rect::new(0.0, 52.0, 100.0, 48.0),
        ]
    );
}

// ─── Dragging ───────────────────────────────────────────────────────────

#[test]
fn dragging_moves_topmost_and_brings_it_to_top() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    gesture(&mut s, (150.0, 150.0), &[(250.0, 250.0)], 1000.0);
    let bottom = s.tablets()[0].id;
    let top = s.tablets()[1].id;

    // Grab the bottom tablet where it doesn't overlap anything.
    s.handle(&PointerEvent::start(10.0, 10.0, 2000.0));
    assert_eq!(s.dragged_id(), Some(bottom));
    s.handle(&PointerEvent::moved(160.0, 170.0, 2016.0));
    s.handle(&PointerEvent::end(160.0, 170.0, 2032.0));

    let ids: Vec<_> = s.tablets().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![top, bottom]);
    assert_eq!(s.tablets()[1].rect(), Rect::new(150.0, 160.0, 100.0, 100.0));
    assert_eq!(s.dragged_id(), None);
}

#[test]
fn press_on_overlap_grabs_visually_topmost() {
    let mut s = session();
    gesture(&mut s, (0.0, 0.0), &[(100.0, 100.0)], 0.0);
    // Drawn up-left from empty canvas so the press doesn't grab the first one.
    gesture(&mut s, (150.0, 150.0), &[(50.0, 50.0)], 1000.0);
    assert_eq!(s.tablets()[1].rect(), Rect::new(50.0, 50.0, 100.0, 100.0));
    let top = s.tablets()[1].id;

    s.handle(&PointerEvent::start(55.0, 55.0, 2000.0));
    assert_eq!(s.dragged_id(), Some(top));
}

#[test]
fn drag_cannot_push_tablet_past_canvas_origin() {
    let mut s = session();
    gesture(&mut s, (20.0, 20.0), &[(120.0, 120.0)], 0.0);
    gesture(&mut s, (30.0, 30.0), &[(-50.0, -80.0)], 1000.0);
    assert_eq!(s.tablets()[0].rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn cancelled_draw_adds_nothing() {
    let mut s = session();
    s.handle(&PointerEvent::start(0.0, 0.0, 0.0));
    s.handle(&PointerEvent::moved(100.0, 100.0, 16.0));
    s.handle(&PointerEvent::cancel(100.0, 100.0, 32.0));
    assert!(s.tablets().is_empty());
    assert_eq!(s.preview(), None);
}

// ─── Split-line indicator ───────────────────────────────────────────────

#[test]
fn lines_follow_pointer_then_hide_after_delay() {
    let mut s = session();
    s.handle(&PointerEvent::start(10.0, 10.0, 0.0));
    s.handle(&PointerEvent::moved(40.0, 30.0, 16.0));
    assert_eq!(s.split_lines(), Some(SplitLines::at(Point::new(40.0, 30.0))));

    s.handle(&PointerEvent::end(40.0, 30.0, 32.0));
    assert!(!s.tick(32.0 + SPLIT_LINE_HIDE_DELAY_MS - 1.0));
    assert!(s.tick(32.0 + SPLIT_LINE_HIDE_DELAY_MS));
    assert_eq!(s.split_lines(), None);
}

#[test]
fn quick_second_gesture_is_not_blanked_by_first_timer() {
    let mut s = session();
    gesture(&mut s, (10.0, 10.0), &[], 0.0);
    // Second press lands 100ms later, well within the first hide delay.
    s.handle(&PointerEvent::start(60.0, 60.0, 100.0));
    assert!(!s.tick(1_000.0));
    assert_eq!(s.split_lines(), Some(SplitLines::at(Point::new(60.0, 60.0))));
}
