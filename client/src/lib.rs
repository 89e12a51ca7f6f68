//! Leptos front end for skin-tone product recommendations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built twice: with `ssr` as a library the server renders, and with
//! `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
