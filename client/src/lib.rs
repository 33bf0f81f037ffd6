//! # portfolio
//!
//! Leptos + WASM frontend for a bilingual (English/Arabic) developer
//! portfolio. Server-rendered by `portfolio-server`, hydrated in the browser.
//!
//! This crate contains pages, components, preference state (language and
//! theme), the remote API client, and the browser glue that persists
//! preferences and mirrors them onto the document root.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
