/// Site Scrubber - Chrome Extension for clearing a site's data
/// Built with Rust + WASM + Yew

mod bridge;
mod clearing;
mod domain;
mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the host extraction for JavaScript access
#[wasm_bindgen]
pub fn site_host(url: &str) -> String {
    domain::host_for_url(url).unwrap_or_else(|| "invalid".to_string())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
