//! Recyclers tab: searchable, tag-filterable directory.

#[cfg(test)]
#[path = "recyclers_test.rs"]
mod recyclers_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::data::recyclers::{RECYCLERS, RecyclerRecord};
use crate::util::recycler_filter::{RecyclerFilter, results_summary, specialization_tags};

fn tag_button_class(selected: bool) -> &'static str {
    if selected { "tag-button tag-button--selected" } else { "tag-button" }
}

fn chips(class: &'static str, items: &'static [&'static str]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <span class=class>{*item}</span> })
        .collect_view()
}

fn recycler_card(recycler: &'static RecyclerRecord) -> impl IntoView {
    view! {
        <div class="card recycler-card">
            <div class="recycler-card__header">
                <div>
                    <h3 class="card__title">{recycler.name}</h3>
                    <p class="card__description">{format!("{} reviews", recycler.reviews)}</p>
                </div>
                <span class="recycler-card__rating">{format!("★ {}", recycler.rating)}</span>
            </div>
            <div class="recycler-card__details">
                <p>"📍 " {recycler.location}</p>
                <p class="recycler-card__distance">{format!("{} km away", recycler.distance_km)}</p>
                <p>"📞 " <a href=recycler.tel_href()>{recycler.phone}</a></p>
                <p>
                    "🌐 "
                    <a href=recycler.website_href() target="_blank" rel="noopener noreferrer">
                        {recycler.website}
                    </a>
                </p>
            </div>
            <div class="recycler-card__section">
                <p class="recycler-card__label">"Specialization:"</p>
                <div class="chip-row">{chips("chip chip--secondary", recycler.specializations)}</div>
            </div>
            <div class="recycler-card__section">
                <p class="recycler-card__label">"🏅 Certifications:"</p>
                <div class="chip-row">{chips("chip chip--primary", recycler.certifications)}</div>
            </div>
            <a class="btn btn--primary btn--block" href=recycler.tel_href()>
                "Contact"
            </a>
        </div>
    }
}

#[component]
pub fn RecyclersPanel() -> impl IntoView {
    let filter = RwSignal::new(RecyclerFilter::default());
    let tags = specialization_tags(RECYCLERS);

    let visible = Memo::new(move |_| filter.with(|f| f.apply(RECYCLERS)));
    let is_selected = move |tag: Option<&str>| filter.with(|f| f.is_tag_selected(tag));

    let tag_buttons = tags
        .into_iter()
        .map(|tag| {
            view! {
                <button
                    class=move || tag_button_class(is_selected(Some(tag)))
                    on:click=move |_| filter.update(|f| f.tag = Some(tag.to_owned()))
                >
                    {tag}
                </button>
            }
        })
        .collect_view();

    let results = move || {
        let shown = visible.get();
        if shown.is_empty() {
            return view! { <p class="panel__empty">"No recyclers found matching your criteria."</p> }.into_any();
        }
        view! { <div class="recycler-grid">{shown.into_iter().map(recycler_card).collect_view()}</div> }.into_any()
    };

    view! {
        <section class="panel panel--recyclers">
            <div class="panel__header">
                <h2>"Authorized Recyclers"</h2>
                <p>"Find certified e-waste recycling centers in Telangana"</p>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="field__input filter-bar__search"
                    placeholder="Search by name or location..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <div class="filter-bar__tags">
                    <button
                        class=move || tag_button_class(is_selected(None))
                        on:click=move |_| filter.update(|f| f.tag = None)
                    >
                        "All"
                    </button>
                    {tag_buttons}
                </div>
            </div>

            <p class="panel__summary">{move || results_summary(visible.get().len(), RECYCLERS.len())}</p>

            {results}
        </section>
    }
}
