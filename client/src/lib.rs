//! # oauth-client
//!
//! Leptos + WASM frontend for the Google sign-in flow.
//!
//! The crate renders three routed pages (login, login-success pause, and the
//! profile dashboard) plus a not-found view. All OAuth work happens in an
//! external backend; this crate only navigates to it and reads the resulting
//! cookie-backed session through `/auth/me`.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        // Another logger is already installed; records still go through it.
        log::warn!("console logger not installed: {err}");
    }
    log::debug!("hydrating oauth client");
    leptos::mount::hydrate_body(app::App);
}
