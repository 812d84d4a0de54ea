//! Officelite Landing Page - Leptos Frontend
//!
//! Renders the page, then hands the mounted DOM to the landing controller.

use leptos::prelude::*;

use crate::components::{CountdownSection, Hero, Pricing};
use crate::services::dom::DomPage;
use crate::services::effects::{observe_pricing_cards, on_page_loaded, spawn_tick_loop};
use crate::state::landing::provide_landing_context;

#[component]
pub fn App() -> impl IntoView {
    let landing = provide_landing_context();

    // Effects fire after the view is in the DOM, so every element can be looked up.
    Effect::new(move || {
        let Some(page) = DomPage::current() else {
            log::error!("No document available, landing behaviors disabled");
            return;
        };

        if let Err(e) = landing.check_mount(&page) {
            log::error!("Landing page not started: {}", e);
            return;
        }

        let config = landing.config();
        if landing.start(&page).keeps_running() {
            spawn_tick_loop(landing, config.tick_interval_ms);
        }

        if let Err(e) = observe_pricing_cards(landing, &page, &config) {
            log::warn!("Pricing card reveal disabled: {}", e);
        }

        if let Err(e) = on_page_loaded(landing, &page) {
            log::warn!("Load-in animation disabled: {}", e);
        }
    });

    view! {
        <main class="landing">
            <Hero/>
            <Pricing/>
            <CountdownSection/>
        </main>
    }
}
