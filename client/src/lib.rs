//! # client
//!
//! Leptos frontend for the DriveAway rental site, rendered on the server and
//! hydrated in the browser.
//!
//! The two decision points live in plain modules so they can be tested
//! without a DOM: [`layout`] decides whether a path gets the site chrome and
//! [`guard`] decides what a protected route shows and where it redirects.
//! Pages, components and the fetch layer sit on top of them.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod guard;
pub mod layout;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
