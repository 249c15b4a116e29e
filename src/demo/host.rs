//! Page file to document, with every target bound

use hovertip::config::Page;
use hovertip::document::{Document, MemoryDocument, NodeId, Viewport};
use hovertip::error::DocumentError;
use hovertip::tooltip::TooltipController;
use ratatui::layout::Rect;

/// A bound target and where it is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TargetBox {
    pub node: NodeId,
    pub label: String,
    pub area: Rect,
}

/// Document, controller and target boxes of one page
#[derive(Debug)]
pub struct Host {
    pub doc: MemoryDocument,
    pub controller: TooltipController<MemoryDocument>,
    pub targets: Vec<TargetBox>,
}

impl Host {
    pub fn build(page: &Page, viewport: Viewport) -> Result<Self, DocumentError> {
        let mut doc = MemoryDocument::new(viewport);
        let body = doc.body();

        if let Some(left) = &page.tip.left {
            doc.add_rule(".tip", "left", left)?;
        }
        if let Some(right) = &page.tip.right {
            doc.add_rule(".tip", "right", right)?;
        }

        for panel in &page.panels {
            let node = doc.create_element("div");
            doc.set_attribute(node, "id", &panel.id)?;
            doc.set_style(node, "display", "none")?;
            doc.set_text(node, &panel.text)?;
            doc.append_child(body, node)?;
        }

        let mut targets = Vec::with_capacity(page.targets.len());
        for spec in &page.targets {
            let node = doc.create_element("div");
            for (name, value) in &spec.attributes {
                doc.set_attribute(node, name, value)?;
            }
            doc.set_text(node, &spec.label)?;
            doc.set_size(node, f64::from(spec.width), f64::from(spec.height))?;
            doc.append_child(body, node)?;

            targets.push(TargetBox {
                node,
                label: spec.label.clone(),
                area: Rect::new(spec.x, spec.y, spec.width, spec.height),
            });
        }

        let mut controller = TooltipController::default();
        for (spec, target) in page.targets.iter().zip(&targets) {
            controller.apply(
                &mut doc,
                std::slice::from_ref(&target.node),
                &page.options_for(spec),
            );
        }

        log::info!(
            "Built page with {} target(s) and {} panel(s)",
            targets.len(),
            page.panels.len()
        );
        Ok(Host {
            doc,
            controller,
            targets,
        })
    }

    /// Targets the controller will react to
    pub fn bound_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| self.controller.is_bound(t.node))
            .count()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.doc.set_viewport(viewport(width, height));
    }
}

/// Viewport of a `width` x `height` terminal
pub fn viewport(width: u16, height: u16) -> Viewport {
    Viewport {
        width: f64::from(width),
        height: f64::from(height),
        scroll_y: 0.0,
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
