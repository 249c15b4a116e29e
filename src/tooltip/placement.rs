//! Overlay placement math
//!
//! Pure functions over pointer coordinates and measured sizes; the controller
//! reads the measurements from the document and writes the results back.
//! All comparisons are inclusive: a boundary that fits exactly does not flip.

use crate::config::Position;
use crate::document::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertical {
    /// Value for the overlay's `top` style, in page pixels
    pub top: f64,
    /// Overlay sits above the pointer
    pub flipped_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Value for the overlay's `left` style, in page pixels
    pub left: f64,
    /// Overlay is right-aligned to the pointer
    pub flipped_right: bool,
}

/// CSS `left` / `right` of the tip indicator, when numeric
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TipOffsets {
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl TipOffsets {
    pub fn from_css(left: Option<&str>, right: Option<&str>) -> Self {
        TipOffsets {
            left: left.and_then(parse_px),
            right: right.and_then(parse_px),
        }
    }
}

pub fn vertical(
    page_y: f64,
    y_offset: f64,
    overlay_height: f64,
    viewport: &Viewport,
    position: Position,
) -> Vertical {
    let edge_y = page_y - viewport.scroll_y;
    let tip_span = y_offset + overlay_height;

    let fits = match position {
        Position::Top => edge_y <= tip_span,
        Position::Bottom => tip_span + edge_y <= viewport.height,
    };

    if fits {
        Vertical {
            top: page_y + y_offset,
            flipped_down: false,
        }
    } else {
        Vertical {
            top: page_y - overlay_height - y_offset / 2.0,
            flipped_down: true,
        }
    }
}

pub fn horizontal(
    page_x: f64,
    x_offset: f64,
    overlay_width: f64,
    viewport_width: f64,
    right_boundary: Option<f64>,
    tip: TipOffsets,
) -> Horizontal {
    let window_x = page_x + overlay_width;
    let within_boundary =
        right_boundary.is_some_and(|percent| window_x <= viewport_width * percent / 100.0);

    if within_boundary {
        Horizontal {
            left: page_x - x_offset - tip.left.unwrap_or(0.0),
            flipped_right: false,
        }
    } else {
        Horizontal {
            left: page_x - overlay_width + x_offset + tip.right.unwrap_or(0.0),
            flipped_right: true,
        }
    }
}

/// Leading integer of a CSS length (`"12px"` -> 12, `"auto"` -> none)
///
/// Fractions are dropped the way `parseInt` drops them.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

/// Style value for a pixel length
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
