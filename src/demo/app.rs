use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::hit_test::target_at;
use super::host::Host;
use super::hover::HoverState;
use super::render;

/// Longest wait for input when no hide is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Demo application state
#[derive(Debug)]
pub struct DemoApp {
    host: Host,
    hover: HoverState,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            hover: HoverState::default(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.should_quit = true;
        }
    }

    /// Feed mouse movement to the controller as pointer events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let dragging = match mouse.kind {
            MouseEventKind::Moved => false,
            MouseEventKind::Drag(_) => true,
            _ => return,
        };

        let hit = target_at(&self.host.targets, mouse.column, mouse.row);
        for event in self.hover.track(hit, mouse.column, mouse.row, dragging) {
            self.host.controller.dispatch(&mut self.host.doc, &event);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.host.resize(width, height);
    }

    /// Run delayed hides that are due
    pub fn tick(&mut self, now: Instant) {
        self.host.controller.tick(&mut self.host.doc, now);
    }

    /// How long to wait for input before the next tick is needed
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.host
            .controller
            .next_hide_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
            .min(IDLE_POLL)
    }

    pub fn render(&self, frame: &mut Frame) {
        render::render(&self.host, self.hover.current(), frame);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
