//! Eureca marketplace conversation screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the chat between a research problem-owner (company) and a
//! researcher. Messages live only in memory for the session: the screen is
//! seeded from a resolved thread and extended locally on submit. Routing,
//! authentication, and the real messaging backend are external collaborators.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
