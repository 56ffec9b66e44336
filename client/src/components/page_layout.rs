//! Content frame under the navigation bar.

use leptos::prelude::*;

/// Wraps a panel; renders a title band only when `title` is present.
#[component]
pub fn PageLayout(#[prop(into)] title: Signal<Option<&'static str>>, children: Children) -> impl IntoView {
    view! {
        <main class="page">
            {move || {
                title
                    .get()
                    .map(|text| {
                        view! {
                            <div class="page__title-band">
                                <h1 class="page__title">{text}</h1>
                            </div>
                        }
                    })
            }}
            <div class="page__content">{children()}</div>
        </main>
    }
}
