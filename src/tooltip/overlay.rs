use crate::document::Document;
use crate::error::DocumentError;

pub const OVERLAY_ID: &str = "ui-tooltip";
pub const TIP_CLASS: &str = "tip";
pub const CONTENT_CLASS: &str = "content";

/// Handles to the overlay node and its two children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay<N> {
    pub root: N,
    /// Pointer indicator
    pub tip: N,
    /// Content area
    pub content: N,
}

impl<N: Copy + Eq> Overlay<N> {
    fn create<D: Document<Node = N>>(doc: &mut D) -> Result<Self, DocumentError> {
        let root = doc.create_element("div");
        doc.set_attribute(root, "id", OVERLAY_ID)?;

        let tip = doc.create_element("div");
        doc.add_class(tip, TIP_CLASS)?;
        let content = doc.create_element("div");
        doc.add_class(content, CONTENT_CLASS)?;

        doc.append_child(root, tip)?;
        doc.append_child(root, content)?;

        let body = doc.body();
        doc.prepend_child(body, root)?;

        log::debug!("Created tooltip overlay");
        Ok(Overlay { root, tip, content })
    }

    /// Wrap an overlay node already in the document, adding missing children
    fn adopt<D: Document<Node = N>>(doc: &mut D, root: N) -> Result<Self, DocumentError> {
        let tip = Self::child_with_class(doc, root, TIP_CLASS, true)?;
        let content = Self::child_with_class(doc, root, CONTENT_CLASS, false)?;
        Ok(Overlay { root, tip, content })
    }

    fn child_with_class<D: Document<Node = N>>(
        doc: &mut D,
        root: N,
        class: &str,
        front: bool,
    ) -> Result<N, DocumentError> {
        for child in doc.children(root)? {
            if doc.has_class(child, class)? {
                return Ok(child);
            }
        }

        let child = doc.create_element("div");
        doc.add_class(child, class)?;
        if front {
            doc.prepend_child(root, child)?;
        } else {
            doc.append_child(root, child)?;
        }
        Ok(child)
    }
}

/// Lazily created overlay, checked against the document on every access
///
/// The document is the source of truth: if it already holds a
/// `#ui-tooltip` node that one is adopted, so a document never carries two.
#[derive(Debug, Clone)]
pub struct OverlaySlot<N> {
    overlay: Option<Overlay<N>>,
}

impl<N> Default for OverlaySlot<N> {
    fn default() -> Self {
        Self { overlay: None }
    }
}

impl<N: Copy + Eq> OverlaySlot<N> {
    /// Overlay currently in the document, if any
    pub fn find<D: Document<Node = N>>(
        &mut self,
        doc: &mut D,
    ) -> Result<Option<Overlay<N>>, DocumentError> {
        let Some(root) = doc.element_by_id(OVERLAY_ID) else {
            self.overlay = None;
            return Ok(None);
        };

        if let Some(overlay) = self.overlay
            && overlay.root == root
        {
            return Ok(Some(overlay));
        }

        let adopted = Overlay::adopt(doc, root)?;
        self.overlay = Some(adopted);
        Ok(Some(adopted))
    }

    /// Overlay in the document, creating it on first use
    pub fn ensure<D: Document<Node = N>>(
        &mut self,
        doc: &mut D,
    ) -> Result<Overlay<N>, DocumentError> {
        if let Some(overlay) = self.find(doc)? {
            return Ok(overlay);
        }
        let overlay = Overlay::create(doc)?;
        self.overlay = Some(overlay);
        Ok(overlay)
    }

    /// Last overlay seen, without consulting the document
    pub fn cached(&self) -> Option<Overlay<N>> {
        self.overlay
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
