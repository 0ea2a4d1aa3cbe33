pub mod common;
pub mod frontend;
pub mod models;
pub mod navigation;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(frontend::App);
}
