//! Tests for demo/host

use hovertip::config::{BUILTIN_PAGE, parse_page};
use hovertip::tooltip::OVERLAY_ID;

use super::*;

fn builtin_host() -> Host {
    let page = parse_page(BUILTIN_PAGE).unwrap();
    Host::build(&page, viewport(80, 24)).unwrap()
}

#[test]
fn test_builtin_page_binds_all_but_disabled_target() {
    let host = builtin_host();

    assert_eq!(host.targets.len(), 5);
    assert_eq!(host.bound_count(), 4);

    let locked = host.targets.iter().find(|t| t.label == "Locked").unwrap();
    assert!(!host.controller.is_bound(locked.node));
}

#[test]
fn test_single_overlay_created() {
    let host = builtin_host();
    assert_eq!(host.doc.count("#ui-tooltip").unwrap(), 1);
    assert!(host.doc.element_by_id(OVERLAY_ID).is_some());
}

#[test]
fn test_panel_is_detached_for_fragment_target() {
    let host = builtin_host();

    assert_eq!(host.doc.count("#shortcuts").unwrap(), 0);
    let help = host.targets.iter().find(|t| t.label == "Help").unwrap();
    let binding = host.controller.binding(help.node).unwrap();
    assert!(binding.fragment.is_some());
}

#[test]
fn test_target_areas_follow_page() {
    let host = builtin_host();
    let status = host.targets.iter().find(|t| t.label == "Status").unwrap();

    assert_eq!(status.area, Rect::new(2, 16, 40, 3));
    assert_eq!(host.doc.outer_width(status.node).unwrap(), 40.0);
    assert_eq!(
        host.doc.attribute(status.node, "data-status").unwrap().as_deref(),
        Some("All systems nominal")
    );
}

#[test]
fn test_tip_rules_come_from_page() {
    let host = builtin_host();
    let overlay = host.controller.overlay().unwrap();

    assert_eq!(
        host.doc.computed_style(overlay.tip, "left").unwrap().as_deref(),
        Some("2px")
    );
}

#[test]
fn test_page_defaults_reach_bindings() {
    let host = builtin_host();
    let open = host.targets.iter().find(|t| t.label == "Open").unwrap();
    let settings = &host.controller.binding(open.node).unwrap().settings;

    assert_eq!(settings.y_offset, 2.0);
    assert_eq!(settings.theme_class(), Some("plain"));
}

#[test]
fn test_empty_page_builds_without_overlay() {
    let page = parse_page("").unwrap();
    let host = Host::build(&page, viewport(80, 24)).unwrap();

    assert!(host.targets.is_empty());
    assert_eq!(host.doc.element_by_id(OVERLAY_ID), None);
}

#[test]
fn test_resize_updates_viewport() {
    let mut host = builtin_host();
    host.resize(120, 40);

    assert_eq!(host.doc.viewport().width, 120.0);
    assert_eq!(host.doc.viewport().height, 40.0);
}
