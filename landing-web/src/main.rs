//! Officelite landing page
//!
//! Leptos front end for the launch countdown and waitlist signup.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::debug!("Landing page WASM loaded");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
