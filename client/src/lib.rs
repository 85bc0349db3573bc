//! # client
//!
//! Leptos + WASM front end for the evacuation timeline questionnaire.
//!
//! The timeline page edits the form and saves it to `localStorage`; the
//! evaluation page renders the saved record as a read-only report. Browser
//! glue is compiled only with the `csr` feature; everything else builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and console logging hooks, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
