//! Hello page - Leptos frontend
//!
//! A single page that fetches a greeting from the hello server and shows it,
//! next to an unrelated click counter.

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod model;
pub mod page;
pub mod store;
pub mod view;

pub use app::App;
pub use error::{FetchError, Result};

/// Client-side entry point for the WASM build
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::debug!("Mounting hello page");
    leptos::mount::mount_to_body(App);
}
