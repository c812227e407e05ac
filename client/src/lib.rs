//! # client
//!
//! Leptos + WASM frontend for the SwiftKes demo wallet.
//!
//! This crate contains pages, components, wallet/chat state and browser
//! utilities. The server binary renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("swiftkes hydrating");
    leptos::mount::hydrate_body(app::App);
}
