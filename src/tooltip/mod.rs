//! Tooltip module
//!
//! A single shared overlay (`div#ui-tooltip > div.tip + div.content`) shown
//! for any number of bound targets. Content comes from a target attribute
//! (`title` by default) or from a fragment detached from the document at
//! attach time. While visible the overlay follows the pointer and flips to
//! whichever side of the cursor has room.

mod content;
mod controller;
mod events;
mod overlay;
pub mod placement;
mod scheduler;
mod title_store;

pub use controller::{Binding, TooltipController};
pub use events::{PointerEvent, PointerKind};
pub use overlay::{CONTENT_CLASS, OVERLAY_ID, Overlay, OverlaySlot, TIP_CLASS};
pub use scheduler::HideScheduler;
pub use title_store::TitleStore;

/// Class set on the overlay while it sits above the pointer
pub const FLIPPED_DOWN_CLASS: &str = "bottom";

/// Class set on the overlay while it is right-aligned to the pointer
pub const FLIPPED_RIGHT_CLASS: &str = "right";
