//! WebAssembly entry point and platform-specific code.

use wasm_bindgen::prelude::*;

/// Physical pixel size of the browser viewport, falling back to the
/// configured window size when the browser does not report one.
pub fn viewport_size(fallback_width: u32, fallback_height: u32) -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (fallback_width, fallback_height);
    };

    let dpr = window.device_pixel_ratio();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback_width as f64);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback_height as f64);

    ((width * dpr) as u32, (height * dpr) as u32)
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting Pagesmith (WASM)");

    crate::App::run().await;
}
