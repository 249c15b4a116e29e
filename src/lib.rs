//! Pointer-tracking tooltip overlay
//!
//! A [`tooltip::TooltipController`] binds any number of target elements to a
//! single shared overlay. Entering a target fills the overlay from one of the
//! target's attributes (or from a detached fragment), moving the pointer keeps
//! it next to the cursor and flips it to whichever side has room, and leaving
//! hides it again.
//!
//! The controller talks to its host through the [`document::Document`] trait.
//! [`document::MemoryDocument`] is an in-memory host used by the bundled
//! terminal demo and by tests.

pub mod config;
pub mod document;
pub mod error;
pub mod tooltip;

pub use config::{Position, Settings, TooltipOptions};
pub use document::{Document, MemoryDocument};
pub use error::{DocumentError, PageError, TooltipError};
pub use tooltip::{PointerEvent, PointerKind, TooltipController};
