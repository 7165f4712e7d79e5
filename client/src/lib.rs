//! # client
//!
//! Leptos + WASM frontend for the AdBuy.ai marketing site.
//!
//! This crate contains the landing page sections, the login/signup views,
//! the two AI demo widgets, their state machines, and the JSON API client.
//! The `ssr` build is rendered by the `server` crate; the `hydrate` build is
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
///
/// The managed-host key bridge is probed here, once, and injected as
/// context; everything below `App` only sees the `KeyHostHandle`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let host = util::key_host::KeyHostHandle::detect();
    if host.is_present() {
        log::info!("managed key host detected");
    }
    leptos::mount::hydrate_body(move || {
        provide_context(host);
        view! { <app::App/> }
    });
}
