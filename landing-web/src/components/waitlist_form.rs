//! Waitlist signup form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::UiEvent;

use crate::state::landing::use_landing_context;

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let landing = use_landing_context();

    let on_submit = move |ev: SubmitEvent| {
        // Never navigate, valid or not.
        ev.prevent_default();
        landing.dispatch(UiEvent::Submit);
    };

    view! {
        <form id="signup-form" class="signup-form" novalidate=true on:submit=on_submit>
            <input
                id="email-input"
                class="email-input"
                type="email"
                placeholder="Email address"
                autocomplete="email"
                on:input=move |_| landing.dispatch(UiEvent::EmailInput)
            />
            <span id="error-message" class="error-message"></span>
            <button type="submit" class="btn btn-primary">"Get on the list"</button>
        </form>
    }
}
