//! # listing-client
//!
//! Leptos + WASM front end for the content-listing site. This crate owns the
//! session layer: the token store, the authenticated request gateway, the
//! auth context, and the route guards for the user and admin areas. Pages
//! here are thin consumers of that layer.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
