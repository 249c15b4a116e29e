use std::collections::HashMap;
use std::time::Instant;

use super::content::{self, Populated};
use super::events::{PointerEvent, PointerKind};
use super::overlay::{Overlay, OverlaySlot};
use super::placement::{self, TipOffsets};
use super::scheduler::HideScheduler;
use super::title_store::TitleStore;
use super::{FLIPPED_DOWN_CLASS, FLIPPED_RIGHT_CLASS};
use crate::config::{Settings, TooltipOptions};
use crate::document::{Document, FadeSpeed};
use crate::error::{OpContext, TooltipError};

/// Resolved settings for one bound target
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<N> {
    pub settings: Settings,
    /// Fragment detached at attach time when a content selector is set
    pub fragment: Option<N>,
}

/// Drives the shared overlay for every bound target of a document
///
/// All state lives here: the overlay handle, per-target bindings, lifted
/// titles and pending delayed hides. The document is passed into each call.
///
/// Operations return `Result`; [`apply`](Self::apply),
/// [`dispatch`](Self::dispatch) and [`tick`](Self::tick) log failures and
/// carry on instead.
#[derive(Debug)]
pub struct TooltipController<D: Document> {
    defaults: Settings,
    overlay: OverlaySlot<D::Node>,
    bindings: HashMap<D::Node, Binding<D::Node>>,
    titles: TitleStore<D::Node>,
    hides: HideScheduler<D::Node>,
    theme_class: Option<String>,
}

impl<D: Document> Default for TooltipController<D> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<D: Document> TooltipController<D> {
    /// Controller whose options merge onto `defaults`
    pub fn new(defaults: Settings) -> Self {
        Self {
            defaults,
            overlay: OverlaySlot::default(),
            bindings: HashMap::new(),
            titles: TitleStore::default(),
            hides: HideScheduler::default(),
            theme_class: None,
        }
    }

    /// Attach tooltips to `targets`, logging any failure
    ///
    /// Returns `targets` so calls can be chained.
    pub fn apply<'t>(
        &mut self,
        doc: &mut D,
        targets: &'t [D::Node],
        options: &TooltipOptions,
    ) -> &'t [D::Node] {
        if let Err(err) = self.attach(doc, targets, options) {
            log::warn!("{err}");
        }
        targets
    }

    /// Attach tooltips to every element matching `selector`, logging any failure
    pub fn apply_selector(
        &mut self,
        doc: &mut D,
        selector: &str,
        options: &TooltipOptions,
    ) -> Vec<D::Node> {
        match doc.query_selector_all(selector).during("apply") {
            Ok(targets) => {
                self.apply(doc, &targets, options);
                targets
            }
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// Bind, rebind or disable `targets`
    ///
    /// An empty target list is a no-op. With `disable` set the targets are
    /// unbound and a present overlay is hidden; otherwise the overlay is
    /// created if needed and each target's previous binding is replaced.
    pub fn attach(
        &mut self,
        doc: &mut D,
        targets: &[D::Node],
        options: &TooltipOptions,
    ) -> Result<(), TooltipError> {
        const OP: &str = "attach";

        if targets.is_empty() {
            return Ok(());
        }

        let settings = options.merge_onto(&self.defaults);
        let fragment = match &settings.content_selector {
            Some(selector) => self.detach_fragment(doc, selector)?,
            None => None,
        };

        if settings.disable {
            for &target in targets {
                self.unbind(doc, target)?;
            }
            if let Some(overlay) = self.overlay.find(doc).during(OP)? {
                doc.set_style(overlay.root, "display", "none").during(OP)?;
            }
            log::debug!("Disabled tooltip on {} target(s)", targets.len());
            return Ok(());
        }

        self.overlay.ensure(doc).during(OP)?;
        for &target in targets {
            self.bindings.insert(
                target,
                Binding {
                    settings: settings.clone(),
                    fragment,
                },
            );
        }
        log::debug!("Bound tooltip to {} target(s)", targets.len());
        Ok(())
    }

    /// Route a pointer event; events on unbound targets are ignored
    pub fn handle_event(
        &mut self,
        doc: &mut D,
        event: &PointerEvent<D::Node>,
    ) -> Result<(), TooltipError> {
        let Some(binding) = self.bindings.get(&event.target).cloned() else {
            return Ok(());
        };

        match event.kind {
            PointerKind::Enter => {
                self.release_pending(doc, event.target)?;
                self.show(doc, event.target, &binding)?;
                self.reposition(doc, event.page_x, event.page_y, &binding.settings)
            }
            PointerKind::Move => {
                self.reposition(doc, event.page_x, event.page_y, &binding.settings)
            }
            PointerKind::Leave => self.hide(doc, event.target, &binding),
            PointerKind::TouchLeave => {
                let due = event.at + binding.settings.timeout;
                self.hides.schedule(event.target, due);
                Ok(())
            }
        }
    }

    /// [`handle_event`](Self::handle_event), logging any failure
    pub fn dispatch(&mut self, doc: &mut D, event: &PointerEvent<D::Node>) {
        if let Err(err) = self.handle_event(doc, event) {
            log::warn!("{err}");
        }
    }

    /// Run every delayed hide due at `now`, returning how many ran
    pub fn run_due_hides(&mut self, doc: &mut D, now: Instant) -> Result<usize, TooltipError> {
        let due = self.hides.take_due(now);
        let mut ran = 0;
        for target in due {
            if let Some(binding) = self.bindings.get(&target).cloned() {
                self.hide(doc, target, &binding)?;
                ran += 1;
            }
        }
        Ok(ran)
    }

    /// [`run_due_hides`](Self::run_due_hides), logging any failure
    pub fn tick(&mut self, doc: &mut D, now: Instant) {
        if let Err(err) = self.run_due_hides(doc, now) {
            log::warn!("{err}");
        }
    }

    /// Theme, fill and fade in the overlay for `target`
    ///
    /// Returns whether the overlay is showing; a target with nothing to
    /// show is hidden instead.
    pub fn show(
        &mut self,
        doc: &mut D,
        target: D::Node,
        binding: &Binding<D::Node>,
    ) -> Result<bool, TooltipError> {
        let overlay = self.require_overlay(doc, "show")?;
        self.apply_theme(doc, &overlay, &binding.settings)?;

        match content::populate(doc, &overlay, &mut self.titles, target, binding)? {
            Populated::Empty => {
                self.hide(doc, target, binding)?;
                Ok(false)
            }
            Populated::Fragment | Populated::Text => {
                doc.fade_in(overlay.root, FadeSpeed::Fast).during("show")?;
                Ok(true)
            }
        }
    }

    /// Restore a lifted title and fade the overlay out
    pub fn hide(
        &mut self,
        doc: &mut D,
        target: D::Node,
        binding: &Binding<D::Node>,
    ) -> Result<(), TooltipError> {
        content::restore_title(doc, &mut self.titles, target, binding)?;
        if let Some(overlay) = self.overlay.find(doc).during("hide")? {
            doc.fade_out(overlay.root, FadeSpeed::Fast).during("hide")?;
        }
        Ok(())
    }

    /// Move the overlay next to the pointer at (`page_x`, `page_y`)
    pub fn reposition(
        &mut self,
        doc: &mut D,
        page_x: f64,
        page_y: f64,
        settings: &Settings,
    ) -> Result<(), TooltipError> {
        let overlay = self.require_overlay(doc, "reposition")?;
        Self::vertical_position(doc, &overlay, page_y, settings)?;
        Self::horizontal_position(doc, &overlay, page_x, settings)
    }

    pub fn is_bound(&self, target: D::Node) -> bool {
        self.bindings.contains_key(&target)
    }

    pub fn binding(&self, target: D::Node) -> Option<&Binding<D::Node>> {
        self.bindings.get(&target)
    }

    /// Title lifted off `target` while its tooltip shows
    pub fn saved_title(&self, target: D::Node) -> Option<&str> {
        self.titles.get(target)
    }

    pub fn overlay(&self) -> Option<Overlay<D::Node>> {
        self.overlay.cached()
    }

    pub fn next_hide_deadline(&self) -> Option<Instant> {
        self.hides.next_deadline()
    }

    fn vertical_position(
        doc: &mut D,
        overlay: &Overlay<D::Node>,
        page_y: f64,
        settings: &Settings,
    ) -> Result<(), TooltipError> {
        const OP: &str = "vertical_position";

        let height = doc.outer_height(overlay.root).during(OP)?;
        let v = placement::vertical(
            page_y,
            settings.y_offset,
            height,
            &doc.viewport(),
            settings.position,
        );

        if v.flipped_down {
            doc.add_class(overlay.root, FLIPPED_DOWN_CLASS).during(OP)?;
        } else {
            doc.remove_class(overlay.root, FLIPPED_DOWN_CLASS).during(OP)?;
        }
        let top = placement::px(v.top);
        doc.set_style(overlay.root, "top", &top).during(OP)
    }

    fn horizontal_position(
        doc: &mut D,
        overlay: &Overlay<D::Node>,
        page_x: f64,
        settings: &Settings,
    ) -> Result<(), TooltipError> {
        const OP: &str = "horizontal_position";

        let width = doc.outer_width(overlay.root).during(OP)?;
        let tip = TipOffsets::from_css(
            doc.computed_style(overlay.tip, "left").during(OP)?.as_deref(),
            doc.computed_style(overlay.tip, "right").during(OP)?.as_deref(),
        );
        let h = placement::horizontal(
            page_x,
            settings.x_offset,
            width,
            doc.viewport().width,
            settings.right_boundary,
            tip,
        );

        if h.flipped_right {
            doc.add_class(overlay.root, FLIPPED_RIGHT_CLASS).during(OP)?;
        } else {
            doc.remove_class(overlay.root, FLIPPED_RIGHT_CLASS).during(OP)?;
        }
        let left = placement::px(h.left);
        doc.set_style(overlay.root, "left", &left).during(OP)
    }

    /// Swap the overlay's theme class for the one `settings` asks for
    fn apply_theme(
        &mut self,
        doc: &mut D,
        overlay: &Overlay<D::Node>,
        settings: &Settings,
    ) -> Result<(), TooltipError> {
        const OP: &str = "theme_tooltip";

        let wanted = settings.theme_class();
        if self.theme_class.as_deref() == wanted {
            return Ok(());
        }
        if let Some(previous) = self.theme_class.take() {
            doc.remove_class(overlay.root, &previous).during(OP)?;
        }
        if let Some(class) = wanted {
            doc.add_class(overlay.root, class).during(OP)?;
            self.theme_class = Some(class.to_string());
        }
        Ok(())
    }

    /// Detach the first node matching `selector` for use as a fragment
    ///
    /// When nothing connected matches, a fragment already detached for the
    /// same selector by an earlier attach is reused.
    fn detach_fragment(
        &self,
        doc: &mut D,
        selector: &str,
    ) -> Result<Option<D::Node>, TooltipError> {
        const OP: &str = "attach";

        if let Some(node) = doc.query_selector(selector).during(OP)? {
            doc.detach(node).during(OP)?;
            return Ok(Some(node));
        }

        let previous = self
            .bindings
            .values()
            .filter(|b| b.settings.content_selector.as_deref() == Some(selector))
            .find_map(|b| b.fragment);
        if previous.is_none() {
            log::debug!("Content selector {selector:?} matched nothing");
        }
        Ok(previous)
    }

    /// Drop pending delayed hides, restoring titles lifted by other targets
    ///
    /// The overlay is about to show for `entered`, so nothing fades out.
    fn release_pending(&mut self, doc: &mut D, entered: D::Node) -> Result<(), TooltipError> {
        for target in self.hides.drain() {
            if target == entered {
                continue;
            }
            if let Some(binding) = self.bindings.get(&target).cloned() {
                content::restore_title(doc, &mut self.titles, target, &binding)?;
            }
        }
        Ok(())
    }

    fn unbind(&mut self, doc: &mut D, target: D::Node) -> Result<(), TooltipError> {
        self.hides.cancel(target);
        if let Some(binding) = self.bindings.remove(&target) {
            content::restore_title(doc, &mut self.titles, target, &binding)?;
        }
        Ok(())
    }

    fn require_overlay(
        &mut self,
        doc: &mut D,
        op: &'static str,
    ) -> Result<Overlay<D::Node>, TooltipError> {
        self.overlay
            .find(doc)
            .during(op)?
            .ok_or(TooltipError::NoOverlay { op })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
