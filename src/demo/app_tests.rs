//! Tests for demo/app

use hovertip::config::{BUILTIN_PAGE, parse_page};
use hovertip::document::Document;
use hovertip::tooltip::OVERLAY_ID;
use ratatui::crossterm::event::{KeyModifiers, MouseButton};

use super::*;
use crate::demo::host::viewport;

fn test_app() -> DemoApp {
    let page = parse_page(BUILTIN_PAGE).unwrap();
    DemoApp::new(Host::build(&page, viewport(80, 24)).unwrap())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn overlay_visible(app: &DemoApp) -> bool {
    let root = app.host.doc.element_by_id(OVERLAY_ID).unwrap();
    app.host.doc.is_displayed(root).unwrap()
}

fn open_title(app: &DemoApp) -> Option<String> {
    let open = app.host.targets.iter().find(|t| t.label == "Open").unwrap();
    app.host.doc.attribute(open.node, "title").unwrap()
}

#[test]
fn test_hover_shows_and_leaving_hides() {
    let mut app = test_app();

    app.handle_mouse(mouse(MouseEventKind::Moved, 4, 3));
    assert!(overlay_visible(&app));
    assert_eq!(open_title(&app), None);

    app.handle_mouse(mouse(MouseEventKind::Moved, 70, 10));
    assert!(!overlay_visible(&app));
    assert_eq!(open_title(&app).as_deref(), Some("Open a file"));
}

#[test]
fn test_hovering_disabled_target_shows_nothing() {
    let mut app = test_app();

    app.handle_mouse(mouse(MouseEventKind::Moved, 46, 17));

    assert!(!overlay_visible(&app));
}

#[test]
fn test_drag_out_hides_after_timeout() {
    let mut app = test_app();

    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 3));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 10));

    app.tick(Instant::now());
    assert!(overlay_visible(&app));

    app.tick(Instant::now() + Duration::from_millis(3001));
    assert!(!overlay_visible(&app));
    assert_eq!(open_title(&app).as_deref(), Some("Open a file"));
}

#[test]
fn test_clicks_are_ignored() {
    let mut app = test_app();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 3));

    assert!(!overlay_visible(&app));
    assert_eq!(app.hover.current(), None);
}

#[test]
fn test_poll_timeout_shrinks_for_pending_hide() {
    let mut app = test_app();
    let now = Instant::now();
    assert_eq!(app.poll_timeout(now), IDLE_POLL);

    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 3));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 10));

    let almost_due = Instant::now() + Duration::from_millis(2950);
    assert!(app.poll_timeout(almost_due) <= Duration::from_millis(50));
    assert_eq!(
        app.poll_timeout(almost_due + Duration::from_secs(1)),
        Duration::ZERO
    );
}

#[test]
fn test_quit_keys() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Char('x')));
    assert!(!app.should_quit());

    app.handle_key(KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(!app.should_quit());

    app.handle_key(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_resize_reaches_document() {
    let mut app = test_app();
    app.resize(100, 50);
    assert_eq!(app.host.doc.viewport().height, 50.0);
}
