//! Frames for the builder columns.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Create a column panel frame with the given fill.
pub fn panel_frame(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .inner_margin(Margin::same(16))
        .outer_margin(Margin::same(8))
}

/// Create the canvas frame. Highlighted while something droppable hovers it.
pub fn canvas_frame(highlight: bool) -> Frame {
    let stroke = if highlight {
        Stroke::new(2.0, theme::ACCENT)
    } else {
        Stroke::new(1.0, theme::BORDER)
    };

    Frame::new()
        .fill(theme::CANVAS_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(stroke)
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(16))
}
