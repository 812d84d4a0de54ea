//! Pricing cards with hover lift and plan shortcuts

use leptos::prelude::*;
use lib_core::UiEvent;

use crate::state::landing::use_landing_context;

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub billing: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: "Free",
        billing: "Up to 5 users for free",
        features: &["Basic document collaboration", "2 GB storage", "Great security and support"],
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$9.99",
        billing: "Per user, billed monthly",
        features: &["All essential integrations", "50 GB storage", "More control and security"],
        featured: true,
    },
    Plan {
        name: "Ultimate",
        price: "$19.99",
        billing: "Per user, billed monthly",
        features: &["Robust work management", "100 GB storage", "VIP support"],
        featured: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="pricing">
            {PLANS
                .iter()
                .enumerate()
                .map(|(index, plan)| view! { <PricingCard index=index plan=plan/> })
                .collect_view()}
        </section>
    }
}

#[component]
fn PricingCard(index: usize, plan: &'static Plan) -> impl IntoView {
    let landing = use_landing_context();
    let class = if plan.featured { "pricing-card featured" } else { "pricing-card" };

    view! {
        <div
            class=class
            data-card-index={index.to_string()}
            on:mouseenter=move |_| landing.dispatch(UiEvent::PointerEnter(index))
            on:mouseleave=move |_| landing.dispatch(UiEvent::PointerLeave(index))
        >
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-price">{plan.price}</p>
            <p class="plan-billing">{plan.billing}</p>
            <ul class="plan-features">
                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <a
                href="#signup"
                class="btn btn-secondary"
                on:click=move |ev| {
                    ev.prevent_default();
                    landing.dispatch(UiEvent::PlanSelected(plan.name.to_string()));
                }
            >
                "Try for Free"
            </a>
        </div>
    }
}
