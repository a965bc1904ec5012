//! # client
//!
//! Leptos + WASM frontend for Rental Gears, an equipment-rental browsing app.
//!
//! This crate contains pages, components, the auth session lifecycle
//! (token store, bootstrap, login/signup/logout), and the REST client that
//! talks to the rental API. The `rental-gears` host server renders it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
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
