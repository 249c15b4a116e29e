use hovertip::document::NodeId;
use ratatui::layout::Position;

use super::host::TargetBox;

/// Target under the cell at (`column`, `row`)
///
/// Later targets are drawn on top, so they win where boxes overlap.
pub fn target_at(targets: &[TargetBox], column: u16, row: u16) -> Option<NodeId> {
    let position = Position::new(column, row);
    targets
        .iter()
        .rev()
        .find(|t| t.area.contains(position))
        .map(|t| t.node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hovertip::document::{Document, MemoryDocument};
    use ratatui::layout::Rect;

    fn boxes(doc: &mut MemoryDocument, areas: &[Rect]) -> Vec<TargetBox> {
        areas
            .iter()
            .map(|&area| TargetBox {
                node: doc.create_element("div"),
                label: String::new(),
                area,
            })
            .collect()
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let mut doc = MemoryDocument::default();
        let targets = boxes(&mut doc, &[Rect::new(2, 2, 10, 3)]);

        assert_eq!(target_at(&targets, 2, 2), Some(targets[0].node));
        assert_eq!(target_at(&targets, 11, 4), Some(targets[0].node));
        assert_eq!(target_at(&targets, 12, 4), None);
        assert_eq!(target_at(&targets, 5, 5), None);
        assert_eq!(target_at(&targets, 0, 0), None);
    }

    #[test]
    fn test_overlap_prefers_last_target() {
        let mut doc = MemoryDocument::default();
        let areas = [Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)];
        let targets = boxes(&mut doc, &areas);

        assert_eq!(target_at(&targets, 6, 6), Some(targets[1].node));
        assert_eq!(target_at(&targets, 1, 1), Some(targets[0].node));
    }
}
