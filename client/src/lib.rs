//! # client
//!
//! Leptos + WASM frontend for the CV analysis product: resume upload,
//! candidate search, and a per-candidate AI chat.
//!
//! Page logic lives in the `screening` controllers. This crate supplies the
//! browser pieces they are generic over: a signal-backed store, a toast
//! notifier, and an HTTP backend built on `gloo-net` and `XMLHttpRequest`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
