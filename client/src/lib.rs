//! # client
//!
//! Leptos + WASM frontend for the Caralytix car-price site.
//!
//! This crate contains pages, components, application state and network
//! types. The `state` modules carry a gated action (price prediction,
//! recommendation, listing search) across a sign-in detour and replay it once
//! the user is authenticated.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
