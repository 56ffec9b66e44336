//! # client
//!
//! Leptos + WASM frontend for the ECONNECTO e-waste collection dashboard.
//!
//! This crate contains the root view, the six tab panels, the login and
//! pickup modals, the fixed mock datasets they render, and the pure helpers
//! (validation, recycler search, counter animation, chart geometry) behind
//! them. The same crate is compiled for SSR (`ssr`) and for the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::console_warn("console logger was already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
