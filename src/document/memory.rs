use std::collections::BTreeMap;
use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::{Document, FadeSpeed, Selector, Viewport};
use crate::error::DocumentError;

/// Handle to an element of a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Box model used to size elements without an explicit size
///
/// One unit per column of text and one per line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub padding_x: f64,
    pub padding_y: f64,
    pub border: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        TextMetrics {
            padding_x: 1.0,
            padding_y: 0.0,
            border: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    size: Option<(f64, f64)>,
    alive: bool,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            size: None,
            alive: true,
        }
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attributes.get("id") == Some(id),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => &self.tag == tag,
        }
    }
}

/// An in-memory element tree implementing [`Document`]
///
/// Nodes are never freed; [`MemoryDocument::destroy`] marks one dead so
/// later calls on it fail with [`DocumentError::StaleNode`].
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    body: NodeId,
    viewport: Viewport,
    metrics: TextMetrics,
    stylesheet: Vec<(Selector, String, String)>,
    last_fade: Option<FadeSpeed>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl MemoryDocument {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            viewport,
            metrics: TextMetrics::default(),
            stylesheet: Vec::new(),
            last_fade: None,
        }
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Add a stylesheet rule consulted by [`Document::computed_style`]
    ///
    /// Later rules win over earlier ones.
    pub fn add_rule(
        &mut self,
        selector: &str,
        property: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        let selector = Selector::parse(selector)?;
        self.stylesheet
            .push((selector, property.to_string(), value.to_string()));
        Ok(())
    }

    /// Pin the outer size of a node instead of deriving it from its text
    pub fn set_size(
        &mut self,
        node: NodeId,
        width: f64,
        height: f64,
    ) -> Result<(), DocumentError> {
        self.get_mut(node)?.size = Some((width, height));
        Ok(())
    }

    /// Mark a node dead
    pub fn destroy(&mut self, node: NodeId) -> Result<(), DocumentError> {
        self.detach(node)?;
        self.get_mut(node)?.alive = false;
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, DocumentError> {
        Ok(self.get(node)?.parent)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|e| e.parent);
        }
        false
    }

    /// Own text of a node
    pub fn text(&self, node: NodeId) -> Result<String, DocumentError> {
        Ok(self.get(node)?.text.clone())
    }

    /// Text of the node and its descendants, one line per text-bearing node
    pub fn inner_text(&self, node: NodeId) -> Result<String, DocumentError> {
        let mut lines = Vec::new();
        self.collect_text(node, &mut lines)?;
        Ok(lines.join("\n"))
    }

    pub fn inline_style(
        &self,
        node: NodeId,
        property: &str,
    ) -> Result<Option<String>, DocumentError> {
        Ok(self.get(node)?.styles.get(property).cloned())
    }

    /// Whether the node's resolved `display` is something other than `none`
    ///
    /// Nodes start hidden until a style or rule displays them.
    pub fn is_displayed(&self, node: NodeId) -> Result<bool, DocumentError> {
        Ok(matches!(
            self.computed_style(node, "display")?.as_deref(),
            Some(display) if display != "none"
        ))
    }

    pub fn classes(&self, node: NodeId) -> Result<Vec<String>, DocumentError> {
        Ok(self.get(node)?.classes.clone())
    }

    pub fn last_fade(&self) -> Option<FadeSpeed> {
        self.last_fade
    }

    /// Number of connected nodes matching `selector`
    pub fn count(&self, selector: &str) -> Result<usize, DocumentError> {
        Ok(self.query_selector_all(selector)?.len())
    }

    fn get(&self, node: NodeId) -> Result<&Element, DocumentError> {
        match self.nodes.get(node.0) {
            Some(element) if element.alive => Ok(element),
            _ => Err(DocumentError::StaleNode(node.to_string())),
        }
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut Element, DocumentError> {
        match self.nodes.get_mut(node.0) {
            Some(element) if element.alive => Ok(element),
            _ => Err(DocumentError::StaleNode(node.to_string())),
        }
    }

    fn collect_text(&self, node: NodeId, lines: &mut Vec<String>) -> Result<(), DocumentError> {
        let element = self.get(node)?;
        if !element.text.is_empty() {
            lines.extend(element.text.lines().map(str::to_string));
        }
        for &child in &element.children {
            self.collect_text(child, lines)?;
        }
        Ok(())
    }

    /// Connected nodes in document order, body first
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(element) = self.nodes.get(id.0) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        order
    }

    /// Insert `child` first or last under `parent`, detaching it first
    fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        front: bool,
    ) -> Result<(), DocumentError> {
        self.get(parent)?;
        self.get(child)?;

        // Refuse to create a cycle
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(DocumentError::HierarchyRequest(child.to_string()));
            }
            ancestor = self.nodes[id.0].parent;
        }

        self.detach(child)?;
        let children = &mut self.get_mut(parent)?.children;
        if front {
            children.insert(0, child);
        } else {
            children.push(child);
        }
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn derived_size(&self, node: NodeId) -> Result<(f64, f64), DocumentError> {
        let mut lines = Vec::new();
        self.collect_text(node, &mut lines)?;
        let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as f64;
        let m = self.metrics;
        let width = widest + 2.0 * (m.padding_x + m.border);
        let height = lines.len() as f64 + 2.0 * (m.padding_y + m.border);
        Ok((width, height))
    }

    fn outer_size(&self, node: NodeId) -> Result<(f64, f64), DocumentError> {
        match self.get(node)?.size {
            Some(size) => Ok(size),
            None => self.derived_size(node),
        }
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        self.body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let selector = Selector::Id(id.to_string());
        self.walk()
            .into_iter()
            .find(|&n| self.nodes[n.0].matches(&selector))
    }

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DocumentError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DocumentError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .walk()
            .into_iter()
            .filter(|&n| n != self.body && self.nodes[n.0].matches(&selector))
            .collect())
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.insert_child(parent, child, true)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.insert_child(parent, child, false)
    }

    fn detach(&mut self, node: NodeId) -> Result<(), DocumentError> {
        let Some(parent) = self.get(node)?.parent else {
            return Ok(());
        };
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|&c| c != node);
        }
        self.get_mut(node)?.parent = None;
        Ok(())
    }

    fn children(&self, node: NodeId) -> Result<Vec<NodeId>, DocumentError> {
        Ok(self.get(node)?.children.clone())
    }

    fn clear_children(&mut self, node: NodeId) -> Result<(), DocumentError> {
        let element = self.get_mut(node)?;
        let children = std::mem::take(&mut element.children);
        element.text.clear();
        for child in children {
            if let Some(c) = self.nodes.get_mut(child.0) {
                c.parent = None;
            }
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
        self.clear_children(node)?;
        self.get_mut(node)?.text = text.to_string();
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, DocumentError> {
        Ok(self.get(node)?.attributes.get(name).cloned())
    }

    fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        self.get_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DocumentError> {
        self.get_mut(node)?.attributes.remove(name);
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), DocumentError> {
        let classes = &mut self.get_mut(node)?.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), DocumentError> {
        self.get_mut(node)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> Result<bool, DocumentError> {
        Ok(self.get(node)?.classes.iter().any(|c| c == class))
    }

    fn set_style(
        &mut self,
        node: NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        self.get_mut(node)?
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn computed_style(
        &self,
        node: NodeId,
        property: &str,
    ) -> Result<Option<String>, DocumentError> {
        let element = self.get(node)?;
        if let Some(value) = element.styles.get(property) {
            return Ok(Some(value.clone()));
        }
        let rule = self.stylesheet.iter().rev().find(|(selector, prop, _)| {
            prop == property && element.matches(selector)
        });
        Ok(rule.map(|(_, _, value)| value.clone()))
    }

    fn outer_width(&self, node: NodeId) -> Result<f64, DocumentError> {
        Ok(self.outer_size(node)?.0)
    }

    fn outer_height(&self, node: NodeId) -> Result<f64, DocumentError> {
        Ok(self.outer_size(node)?.1)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fade_in(&mut self, node: NodeId, speed: FadeSpeed) -> Result<(), DocumentError> {
        let element = self.get_mut(node)?;
        element.styles.insert("display".to_string(), "block".to_string());
        element.styles.insert("opacity".to_string(), "1".to_string());
        self.last_fade = Some(speed);
        Ok(())
    }

    fn fade_out(&mut self, node: NodeId, speed: FadeSpeed) -> Result<(), DocumentError> {
        let element = self.get_mut(node)?;
        element.styles.insert("display".to_string(), "none".to_string());
        element.styles.insert("opacity".to_string(), "0".to_string());
        self.last_fade = Some(speed);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
