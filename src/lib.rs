//! # sales-dashboard
//!
//! Leptos + WASM client for the sales team dashboard. Users sign in with
//! email and password against a hosted auth service, then see per-rep deal
//! totals and record new deals.
//!
//! The crate holds the single source of truth for session state
//! (`state::session_store`), the credential service boundary (`net`), route
//! guards, and the pages and components built on top of them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
