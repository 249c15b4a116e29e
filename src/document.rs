//! Host document seam
//!
//! The tooltip controller never touches a real DOM. Everything it needs
//! (element lookup, attributes, classes, styles, measurement, fades) goes
//! through the [`Document`] trait, so any host that can answer these calls can
//! drive it. [`MemoryDocument`] is the bundled in-memory host.

mod memory;
mod selector;

use std::fmt::Debug;
use std::hash::Hash;

pub use memory::{MemoryDocument, NodeId, TextMetrics};
pub use selector::Selector;

use crate::error::DocumentError;

/// Visible area of the document, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Vertical scroll offset of the page
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1024.0,
            height: 768.0,
            scroll_y: 0.0,
        }
    }
}

/// Fade animation speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeSpeed {
    Fast,
}

/// Operations a host document must provide
///
/// Lookups only see nodes connected to the body. Detached nodes stay valid
/// handles and can be inserted again.
pub trait Document {
    /// Element handle; identity is equality
    type Node: Copy + Eq + Hash + Debug;

    fn body(&self) -> Self::Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First connected element matching `selector`, in document order
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, DocumentError>;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Node>, DocumentError>;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn prepend_child(&mut self, parent: Self::Node, child: Self::Node)
    -> Result<(), DocumentError>;

    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), DocumentError>;

    /// Remove `node` from its parent; a no-op when already detached
    fn detach(&mut self, node: Self::Node) -> Result<(), DocumentError>;

    fn children(&self, node: Self::Node) -> Result<Vec<Self::Node>, DocumentError>;

    /// Detach every child and drop any text
    fn clear_children(&mut self, node: Self::Node) -> Result<(), DocumentError>;

    /// Replace the node's contents with plain text
    fn set_text(&mut self, node: Self::Node, text: &str) -> Result<(), DocumentError>;

    fn attribute(&self, node: Self::Node, name: &str) -> Result<Option<String>, DocumentError>;

    fn set_attribute(
        &mut self,
        node: Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError>;

    fn remove_attribute(&mut self, node: Self::Node, name: &str) -> Result<(), DocumentError>;

    fn add_class(&mut self, node: Self::Node, class: &str) -> Result<(), DocumentError>;

    fn remove_class(&mut self, node: Self::Node, class: &str) -> Result<(), DocumentError>;

    fn has_class(&self, node: Self::Node, class: &str) -> Result<bool, DocumentError>;

    fn set_style(
        &mut self,
        node: Self::Node,
        property: &str,
        value: &str,
    ) -> Result<(), DocumentError>;

    /// Resolved style value: inline first, then stylesheet rules
    fn computed_style(
        &self,
        node: Self::Node,
        property: &str,
    ) -> Result<Option<String>, DocumentError>;

    /// Border-box width
    fn outer_width(&self, node: Self::Node) -> Result<f64, DocumentError>;

    /// Border-box height
    fn outer_height(&self, node: Self::Node) -> Result<f64, DocumentError>;

    fn viewport(&self) -> Viewport;

    /// Finish any running fade, then fade in
    fn fade_in(&mut self, node: Self::Node, speed: FadeSpeed) -> Result<(), DocumentError>;

    /// Stop any running fade, then fade out
    fn fade_out(&mut self, node: Self::Node, speed: FadeSpeed) -> Result<(), DocumentError>;
}
