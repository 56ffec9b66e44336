//! Dashboard hero banner with the two call-to-action buttons.

use leptos::prelude::*;

use crate::state::ui::Tab;

#[component]
pub fn Hero(on_navigate: Callback<Tab>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"Empowering a Cleaner Future with " <span class="hero__accent">"Econnecto"</span></h1>
                <p class="hero__subtitle">
                    "Schedule your e-waste pickups, connect with recyclers, and join our mission to make the planet greener."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary btn--lg" on:click=move |_| on_navigate.run(Tab::Pickups)>
                        "Schedule a Pickup →"
                    </button>
                    <button class="btn btn--outline btn--lg" on:click=move |_| on_navigate.run(Tab::Awareness)>
                        "Learn More"
                    </button>
                </div>
            </div>
        </section>
    }
}
