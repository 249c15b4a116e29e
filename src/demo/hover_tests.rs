//! Tests for demo/hover

use hovertip::document::{Document, MemoryDocument};

use super::*;

fn kinds(events: &[PointerEvent<NodeId>]) -> Vec<(PointerKind, NodeId)> {
    events.iter().map(|e| (e.kind, e.target)).collect()
}

#[test]
fn test_enter_then_move_then_leave() {
    let mut doc = MemoryDocument::default();
    let a = doc.create_element("div");
    let mut hover = HoverState::default();

    let events = hover.track(Some(a), 3, 4, false);
    assert_eq!(kinds(&events), vec![(PointerKind::Enter, a)]);
    assert_eq!(events[0].page_x, 3.0);
    assert_eq!(events[0].page_y, 4.0);

    let events = hover.track(Some(a), 5, 4, false);
    assert_eq!(kinds(&events), vec![(PointerKind::Move, a)]);

    let events = hover.track(None, 20, 4, false);
    assert_eq!(kinds(&events), vec![(PointerKind::Leave, a)]);
    assert_eq!(hover.current(), None);
}

#[test]
fn test_moving_between_targets_leaves_before_entering() {
    let mut doc = MemoryDocument::default();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    let mut hover = HoverState::default();

    hover.track(Some(a), 0, 0, false);
    let events = hover.track(Some(b), 1, 0, false);

    assert_eq!(
        kinds(&events),
        vec![(PointerKind::Leave, a), (PointerKind::Enter, b)]
    );
    assert_eq!(hover.current(), Some(b));
}

#[test]
fn test_dragging_out_is_touch_leave() {
    let mut doc = MemoryDocument::default();
    let a = doc.create_element("div");
    let mut hover = HoverState::default();

    hover.track(Some(a), 0, 0, true);
    let events = hover.track(None, 9, 9, true);

    assert_eq!(kinds(&events), vec![(PointerKind::TouchLeave, a)]);
}

#[test]
fn test_no_events_outside_targets() {
    let mut hover = HoverState::default();
    assert!(hover.track(None, 0, 0, false).is_empty());
}
