//! Hero section with the primary call to action

use leptos::prelude::*;
use lib_core::UiEvent;

use crate::state::landing::use_landing_context;

#[component]
pub fn Hero() -> impl IntoView {
    let landing = use_landing_context();

    view! {
        <header class="hero">
            <nav class="hero-nav">
                <span class="logo">"officelite"</span>
            </nav>
            <div class="hero-content">
                <h1 class="hero-title">"A simple solution to complex tasks is coming soon"</h1>
                <p class="hero-subtitle">
                    "Say goodbye to inefficient juggling of multiple apps, teams, and projects. "
                    "Officelite is the new collaboration platform built with an intuitive interface "
                    "to improve productivity."
                </p>
                <button
                    id="hero-cta"
                    class="btn btn-primary"
                    on:click=move |_| landing.dispatch(UiEvent::HeroCta)
                >
                    "Get Started"
                </button>
            </div>
        </header>
    }
}
