//! Hover tracking
//!
//! Turns the target under the mouse into enter, move and leave events.

use hovertip::document::NodeId;
use hovertip::tooltip::{PointerEvent, PointerKind};

/// Which target the pointer is currently over
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HoverState {
    current: Option<NodeId>,
}

impl HoverState {
    /// Events for a pointer now over `hit` at (`column`, `row`)
    ///
    /// Leaving while `dragging` reports a touch leave so the tooltip lingers
    /// for its timeout.
    pub fn track(
        &mut self,
        hit: Option<NodeId>,
        column: u16,
        row: u16,
        dragging: bool,
    ) -> Vec<PointerEvent<NodeId>> {
        let (x, y) = (f64::from(column), f64::from(row));
        let mut events = Vec::new();

        if self.current == hit {
            if let Some(target) = hit {
                events.push(PointerEvent::new(PointerKind::Move, target, x, y));
            }
            return events;
        }

        if let Some(previous) = self.current.take() {
            let kind = if dragging {
                PointerKind::TouchLeave
            } else {
                PointerKind::Leave
            };
            events.push(PointerEvent::new(kind, previous, x, y));
        }
        if let Some(target) = hit {
            events.push(PointerEvent::new(PointerKind::Enter, target, x, y));
        }
        self.current = hit;
        events
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod hover_tests;
