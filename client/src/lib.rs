//! # portfolio
//!
//! Leptos + WASM personal portfolio page.
//!
//! This crate contains the page, its interactive widgets (typewriter, scroll
//! reveal, tilt card), their browser-independent state machines, and the
//! content table the page renders from. The `ssr` feature renders it on the
//! server; the `hydrate` feature makes it interactive in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the server-rendered page to the reactive runtime.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
