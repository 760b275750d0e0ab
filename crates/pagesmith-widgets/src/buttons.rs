//! Button components: solid action buttons.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Ui};

use crate::{sizing, theme};

/// Color scheme for an action button.
#[derive(Clone, Copy)]
pub struct ActionButtonStyle {
    /// Background color
    pub bg_color: Color32,
    /// Background color when hovered
    pub hover_color: Color32,
    /// Label color
    pub text_color: Color32,
}

impl Default for ActionButtonStyle {
    fn default() -> Self {
        Self {
            bg_color: theme::ACCENT,
            hover_color: Color32::from_rgb(37, 99, 235),
            text_color: Color32::WHITE,
        }
    }
}

impl ActionButtonStyle {
    /// Red button for destructive actions.
    pub fn danger() -> Self {
        Self {
            bg_color: theme::DANGER,
            hover_color: Color32::from_rgb(185, 28, 28),
            text_color: Color32::WHITE,
        }
    }
}

/// A solid, full-color button with a text label.
pub struct ActionButton<'a> {
    label: &'a str,
    style: ActionButtonStyle,
    full_width: bool,
    font_size: f32,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: ActionButtonStyle::default(),
            full_width: false,
            font_size: 13.0,
        }
    }

    /// Use the destructive style.
    pub fn danger(mut self) -> Self {
        self.style = ActionButtonStyle::danger();
        self
    }

    /// Stretch across the available width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let text_width = galley.size().x + 32.0;
        let width = if self.full_width {
            ui.available_width().max(text_width)
        } else {
            text_width
        };

        let (rect, response) =
            ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.style.hover_color
            } else {
                self.style.bg_color
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                self.style.text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
