//! Reusable egui widget components with Tailwind-inspired styling.
//!
//! This crate provides the styled pieces the page builder is assembled from:
//!
//! - **Buttons**: Solid action buttons (delete, confirm)
//! - **Tiles**: Palette tiles and canvas element cards
//! - **Frames**: Column panel frames
//! - **Layout**: Headings, section labels, drop markers

pub mod buttons;
pub mod frames;
pub mod layout;
pub mod tiles;

pub use buttons::{ActionButton, ActionButtonStyle};
pub use frames::{canvas_frame, panel_frame};
pub use layout::{drop_marker, heading, hint, section_label, DropEdge};
pub use tiles::{CardContent, ElementCard, PaletteTile};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Palette tile height
    pub const TILE_HEIGHT: f32 = 36.0;
    /// Minimum element card height
    pub const CARD_MIN_HEIGHT: f32 = 40.0;
    /// Action button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 12;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue-500)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red-600)
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
    /// Footer heart (red-700)
    pub const HEART: Color32 = Color32::from_rgb(185, 28, 28);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Palette column background (gray-100)
    pub const PALETTE_BG: Color32 = Color32::from_rgb(243, 244, 246);
    /// Edit panel background (gray-50)
    pub const PANEL_BG: Color32 = Color32::from_rgb(249, 250, 251);
    /// Canvas background
    pub const CANVAS_BG: Color32 = Color32::WHITE;
}
