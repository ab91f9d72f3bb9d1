//! # mtp-client
//!
//! Leptos + WASM front-end for the MTP multi-tool product.
//!
//! This crate contains the route authorization gate, the auth session
//! provider, typed REST wrappers for the backend, page components, and
//! formatting/validation helpers. The `server` crate renders it with SSR and
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
