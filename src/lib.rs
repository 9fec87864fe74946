//! # storefront
//!
//! Leptos + WASM client for the personalized-supplement subscription shop:
//! marketing pages, session auth flows, a locally persisted shopping cart,
//! and subscription/order management over the hosted backend.
//!
//! The two pieces of shared client state — the cart state machine and the
//! auth session — live in `state` and are provided as contexts from the
//! application root. `components::protected_route` gates authenticated
//! pages with a bounded-wait, fail-closed session guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
