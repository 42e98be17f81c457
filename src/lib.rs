//! # listkeeper-client
//!
//! Leptos + WASM frontend for the ListKeeper application.
//!
//! The crate centers on the authentication state container: a plain
//! [`state::auth::AuthState`] value, an exhaustive reducer over the closed
//! action set, and the [`state::store::AuthStore`] service object that owns
//! the state, talks to the server's auth endpoints, and redirects after
//! successful actions. Pages and components consume the store via context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
