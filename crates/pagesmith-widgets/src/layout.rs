//! Layout helpers: headings, section labels, drop markers.

use egui::{Rect, Stroke, Ui};

use crate::theme;

/// Draw a column heading (bold).
pub fn heading(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(16.0)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(12.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}

/// Draw a muted hint line.
pub fn hint(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(13.0)
            .color(theme::TEXT_MUTED),
    );
}

/// Which side of a card a dragged element will land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEdge {
    Above,
    Below,
}

/// Draw an insertion marker along one edge of `rect`.
pub fn drop_marker(ui: &Ui, rect: Rect, edge: DropEdge) {
    let y = match edge {
        DropEdge::Above => rect.top() - 2.0,
        DropEdge::Below => rect.bottom() + 2.0,
    };
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(2.0, theme::ACCENT),
    );
}
