//! # imagepro-client
//!
//! Leptos + WASM frontend for the ImagePro editor shell.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers for the auth and profile endpoints. It is compiled twice: with
//! `ssr` into the server binary and with `hydrate` into the browser bundle.

#![recursion_limit = "256"]

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
