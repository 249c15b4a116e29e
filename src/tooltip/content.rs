//! Overlay content: fragment insertion, attribute text, title save and restore

use super::controller::Binding;
use super::overlay::Overlay;
use super::title_store::TitleStore;
use crate::document::Document;
use crate::error::{OpContext, TooltipError};

const TITLE_ATTR: &str = "title";

/// What ended up in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Populated {
    Fragment,
    Text,
    /// Nothing to show; the caller hides instead
    Empty,
}

pub(crate) fn populate<D: Document>(
    doc: &mut D,
    overlay: &Overlay<D::Node>,
    titles: &mut TitleStore<D::Node>,
    target: D::Node,
    binding: &Binding<D::Node>,
) -> Result<Populated, TooltipError> {
    match &binding.settings.content_selector {
        Some(selector) => {
            let Some(fragment) = binding.fragment else {
                return Err(TooltipError::EmptyFragment {
                    op: "html_content",
                    selector: selector.clone(),
                });
            };
            html_content(doc, overlay, fragment)?;
            Ok(Populated::Fragment)
        }
        None => text_content(doc, overlay, titles, target, &binding.settings.content_attr),
    }
}

/// Put the fragment itself (not a copy) into the content area
fn html_content<D: Document>(
    doc: &mut D,
    overlay: &Overlay<D::Node>,
    fragment: D::Node,
) -> Result<(), TooltipError> {
    const OP: &str = "html_content";

    doc.clear_children(overlay.content).during(OP)?;
    doc.append_child(overlay.content, fragment).during(OP)?;

    let children = doc.children(overlay.content).during(OP)?;
    if let Some(&first) = children.first() {
        doc.set_style(first, "display", "block").during(OP)?;
    }
    Ok(())
}

fn text_content<D: Document>(
    doc: &mut D,
    overlay: &Overlay<D::Node>,
    titles: &mut TitleStore<D::Node>,
    target: D::Node,
    content_attr: &str,
) -> Result<Populated, TooltipError> {
    const OP: &str = "text_content";

    let mut text = doc.attribute(target, content_attr).during(OP)?;

    if content_attr == TITLE_ATTR {
        match text.clone().filter(|t| !t.is_empty()) {
            Some(value) => {
                titles.save(target, value);
                doc.remove_attribute(target, TITLE_ATTR).during(OP)?;
            }
            // Entered again before a leave restored it
            None if text.is_none() => text = titles.get(target).map(str::to_string),
            None => {}
        }
    }

    match text.filter(|t| !t.is_empty()) {
        Some(text) => {
            doc.set_text(overlay.content, &text).during(OP)?;
            Ok(Populated::Text)
        }
        None => Ok(Populated::Empty),
    }
}

/// Put a lifted `title` back on its target
///
/// Only attribute-driven tooltips lift titles, so fragment bindings skip this.
pub(crate) fn restore_title<D: Document>(
    doc: &mut D,
    titles: &mut TitleStore<D::Node>,
    target: D::Node,
    binding: &Binding<D::Node>,
) -> Result<(), TooltipError> {
    const OP: &str = "hide_content";

    if binding.settings.uses_fragment() {
        return Ok(());
    }
    if let Some(title) = titles.take(target) {
        doc.set_attribute(target, TITLE_ATTR, &title).during(OP)?;
    }
    Ok(())
}
