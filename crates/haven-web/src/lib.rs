pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod server_fns;
pub mod shell;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
