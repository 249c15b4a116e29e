//! Terminal host for the tooltip controller
//!
//! Builds a [`MemoryDocument`](hovertip::document::MemoryDocument) from a page
//! file, feeds it mouse movement as pointer events and draws the targets and
//! the overlay with ratatui. One terminal cell is one pixel.

mod app;
mod hit_test;
mod host;
mod hover;
mod render;

pub use app::DemoApp;
pub use host::{Host, viewport};
