//! Launch countdown and waitlist signup section

use leptos::prelude::*;
use lib_core::TimeUnit;

use crate::components::WaitlistForm;

#[component]
pub fn CountdownSection() -> impl IntoView {
    view! {
        <section class="countdown-section" id="signup">
            <div class="countdown">
                <h2 class="countdown-title">"Coming soon"</h2>
                <div class="countdown-units">
                    {TimeUnit::ALL
                        .into_iter()
                        .map(|unit| view! { <TimeUnitBox unit=unit/> })
                        .collect_view()}
                </div>
            </div>
            <WaitlistForm/>
        </section>
    }
}

/// One display slot. The engine writes into the element with the unit's id.
#[component]
fn TimeUnitBox(unit: TimeUnit) -> impl IntoView {
    view! {
        <div class="time-unit">
            <span class="time-value" id={unit.element_id()}>"00"</span>
            <span class="time-label">{unit.label()}</span>
        </div>
    }
}
