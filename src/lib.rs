//! # quickserve-client
//!
//! Leptos + WASM front-end for the QuickServe service-booking application.
//! A thin client over the Firebase REST surfaces (Identity Toolkit for
//! authentication, Firestore for role/profile documents) and the QuickServe
//! REST API gateway.
//!
//! This crate contains pages, components, shared reactive state, and the
//! network layer. Browser-only code is gated behind the `csr` feature so the
//! remaining logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
