//! Demo rendering
//!
//! Targets are drawn as bordered boxes. The overlay is drawn wherever the
//! controller last placed it, sized by the document's own measurements.

use hovertip::document::{Document, MemoryDocument, NodeId};
use hovertip::tooltip::placement::parse_px;
use hovertip::tooltip::{FLIPPED_DOWN_CLASS, FLIPPED_RIGHT_CLASS, Overlay};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::host::{Host, TargetBox};

const PANEL_THEME: &str = "panel";

pub fn render(host: &Host, hovered: Option<NodeId>, frame: &mut Frame) {
    let frame_area = frame.area();

    for target in &host.targets {
        render_target(frame, target, hovered == Some(target.node), frame_area);
    }

    if let Some(overlay) = host.controller.overlay() {
        render_overlay(&host.doc, &overlay, frame, frame_area);
    }
}

fn render_target(frame: &mut Frame, target: &TargetBox, hovered: bool, frame_area: Rect) {
    let area = target.area.intersection(frame_area);
    if area.is_empty() {
        return;
    }

    let border_style = if hovered {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(target.label.as_str()).block(block), area);
}

fn render_overlay(
    doc: &MemoryDocument,
    overlay: &Overlay<NodeId>,
    frame: &mut Frame,
    frame_area: Rect,
) {
    let Some(area) = overlay_area(doc, overlay.root, frame_area) else {
        return;
    };
    let text = doc.inner_text(overlay.content).unwrap_or_default();

    let has_class = |class: &str| doc.has_class(overlay.root, class).unwrap_or(false);
    let color = if has_class(PANEL_THEME) {
        Color::Cyan
    } else {
        Color::White
    };
    let down = has_class(FLIPPED_DOWN_CLASS);
    let right = has_class(FLIPPED_RIGHT_CLASS);
    let marker = match (down, right) {
        (true, true) => "↘",
        (true, false) => "↙",
        (false, true) => "↗",
        (false, false) => "↖",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(marker)
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(block),
        area,
    );
}

/// Cells covered by the overlay, or none while it is hidden
///
/// Negative offsets are clamped to the frame edge.
pub fn overlay_area(doc: &MemoryDocument, root: NodeId, frame_area: Rect) -> Option<Rect> {
    if !doc.is_displayed(root).ok()? {
        return None;
    }

    let left = doc.inline_style(root, "left").ok()??;
    let top = doc.inline_style(root, "top").ok()??;
    let x = parse_px(&left)?.max(0.0) as u16;
    let y = parse_px(&top)?.max(0.0) as u16;
    let width = doc.outer_width(root).ok()?.max(0.0) as u16;
    let height = doc.outer_height(root).ok()?.max(0.0) as u16;

    let area = Rect::new(x, y, width, height).intersection(frame_area);
    (!area.is_empty()).then_some(area)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
