#[cfg(feature = "ssr")]
pub mod api;
pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod draft;
pub mod icons;
pub mod pages;
pub mod roster;
pub mod services;
pub mod session;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
