//! Tile components: palette tiles and canvas element cards.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, Frame, Id, Margin, Response, Sense, Stroke,
    Ui,
};

use crate::{sizing, theme};

/// A palette entry the user can pick up and drag.
pub struct PaletteTile<'a> {
    label: &'a str,
    active: bool,
}

impl<'a> PaletteTile<'a> {
    /// Create a new palette tile.
    pub fn new(label: &'a str) -> Self {
        Self { label, active: false }
    }

    /// Mark the tile as the one currently being dragged.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Show the tile. The response only senses hover; dragging is handled
    /// by the surrounding drag source.
    pub fn show(self, ui: &mut Ui) -> Response {
        let size = vec2(ui.available_width(), sizing::TILE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let rounding = CornerRadius::same(sizing::CORNER_RADIUS);
            // Drop shadow
            ui.painter().rect_filled(
                rect.translate(vec2(0.0, 1.0)),
                rounding,
                Color32::from_black_alpha(20),
            );

            let (bg_color, stroke) = if self.active {
                (theme::SELECTED_BG, Stroke::new(1.0, theme::ACCENT))
            } else if response.hovered() {
                (theme::HOVER_BG, Stroke::NONE)
            } else {
                (Color32::WHITE, Stroke::NONE)
            };
            ui.painter().rect_filled(rect, rounding, bg_color);
            if stroke != Stroke::NONE {
                ui.painter()
                    .rect_stroke(rect, rounding, stroke, egui::StrokeKind::Inside);
            }

            ui.painter().text(
                egui::Pos2::new(rect.left() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                theme::TEXT,
            );
        }

        response.on_hover_cursor(CursorIcon::Grab)
    }
}

/// What an element card renders.
#[derive(Debug, Clone, Copy)]
pub enum CardContent<'a> {
    /// A paragraph of text.
    Paragraph(&'a str),
    /// An image placeholder with its source URL.
    Image(&'a str),
    /// A styled button with a caption.
    Button(&'a str),
}

/// A placed element on the canvas.
pub struct ElementCard<'a> {
    id: Id,
    content: CardContent<'a>,
    selected: bool,
}

impl<'a> ElementCard<'a> {
    /// Create a card. `id` must be stable across frames.
    pub fn new(id: Id, content: CardContent<'a>) -> Self {
        Self {
            id,
            content,
            selected: false,
        }
    }

    /// Set whether the card is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the card and return a response over its area that senses both
    /// clicks and drags.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (fill, stroke) = if self.selected {
            (theme::SELECTED_BG, Stroke::new(2.0, theme::ACCENT))
        } else {
            (Color32::WHITE, Stroke::new(1.0, theme::BORDER))
        };

        let inner = Frame::new()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
            .inner_margin(Margin::same(8))
            .outer_margin(Margin::symmetric(0, 4))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(sizing::CARD_MIN_HEIGHT - 16.0);
                match self.content {
                    CardContent::Paragraph(text) => {
                        ui.label(egui::RichText::new(text).size(14.0).color(theme::TEXT));
                    }
                    CardContent::Image(src) => image_placeholder(ui, src),
                    CardContent::Button(label) => button_preview(ui, label),
                }
            });

        let response = ui
            .interact(inner.response.rect, self.id, Sense::click_and_drag())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.dragged() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        }
        response
    }
}

/// Gray box standing in for a remote image.
fn image_placeholder(ui: &mut Ui, src: &str) {
    let width = ui.available_width().min(320.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, width * 0.5), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            Color32::from_gray(229),
        );
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Image",
            egui::FontId::proportional(13.0),
            theme::TEXT_MUTED,
        );
    }
    ui.label(egui::RichText::new(src).size(11.0).color(theme::TEXT_MUTED));
}

/// Non-interactive rendering of a page button.
fn button_preview(ui: &mut Ui, label: &str) {
    let font_id = egui::FontId::proportional(14.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
    let size = vec2(galley.size().x + 32.0, galley.size().y + 16.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), theme::ACCENT);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            font_id,
            Color32::WHITE,
        );
    }
}
