//! Pagesmith Application
//!
//! The application shell providing windowing, the egui frame and the
//! three-column builder UI around the core canvas state.

mod app;
mod ui;

pub use app::{App, AppConfig};
pub use ui::{render_ui, UiLayout};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
