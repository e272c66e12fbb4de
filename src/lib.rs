/// Copy Link As - browser extension that copies tab links through templates
/// Built with Rust + WASM + Yew

pub mod background;
pub mod bridge;
pub mod config;
pub mod copy;
pub mod domain;
pub mod error;
pub mod format;
pub mod menu;
pub mod storage;
pub mod tab_data;
pub mod template;
pub mod ui;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the link helpers for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::extract_domain(url)
}

#[wasm_bindgen]
pub fn extract_domain_path(url: &str) -> String {
    domain::extract_domain_path(url)
}

/// `fields` is an object with any of `title`, `url`, `domain`, `domain_path`
#[wasm_bindgen]
pub fn render_template(template: &str, fields: JsValue) -> String {
    let fields: template::TemplateFields =
        serde_wasm_bindgen::from_value(fields).unwrap_or_else(|e| {
            log::warn!("Failed to parse template fields: {:?}", e);
            template::TemplateFields::default()
        });
    template::render(template, &fields)
}

// Register context menu, click and storage listeners
#[wasm_bindgen]
pub fn start_background() {
    background::listen();
}

// Start the Yew app for the options page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::OptionsApp>::new().render();
}
