use std::time::Instant;

/// Pointer events the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Move,
    Leave,
    /// Touch ended outside the target; hides after the configured timeout
    TouchLeave,
}

/// A pointer event on a target, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent<N> {
    pub kind: PointerKind,
    pub target: N,
    pub page_x: f64,
    pub page_y: f64,
    pub at: Instant,
}

impl<N> PointerEvent<N> {
    pub fn new(kind: PointerKind, target: N, page_x: f64, page_y: f64) -> Self {
        Self {
            kind,
            target,
            page_x,
            page_y,
            at: Instant::now(),
        }
    }

    pub fn with_time(mut self, at: Instant) -> Self {
        self.at = at;
        self
    }
}
