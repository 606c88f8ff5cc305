//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains pages, components, UI state, static page content, and
//! the browser glue (theme storage, clipboard, scroll tracking). Browser-only
//! code sits behind the `hydrate` feature; the `ssr` feature is enabled by the
//! server binary for server-side rendering.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the server-rendered markup to the reactive app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
