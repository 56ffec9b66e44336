//! Pickups tab: upcoming collections, history, and running totals.

#[cfg(test)]
#[path = "pickups_test.rs"]
mod pickups_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::data::pickups::{PICKUPS, PickupRecord, PickupStatus, completed, scheduled, totals};
use crate::util::counter::group_thousands;

/// Weight with trailing `.0` dropped: `18 kg`, `32.5 kg`.
fn weight_label(kg: f64) -> String {
    if (kg - kg.round()).abs() < f64::EPSILON {
        format!("{kg:.0} kg")
    } else {
        format!("{kg:.1} kg")
    }
}

fn pickup_row(record: &'static PickupRecord) -> impl IntoView {
    let outcome = match record.status {
        PickupStatus::Scheduled => None,
        PickupStatus::Completed => Some(view! {
            <div class="pickup-row__outcome">
                <span>{weight_label(record.weight_kg)}</span>
                <span class="pickup-row__points">{format!("+{} pts", record.points)}</span>
            </div>
        }),
    };

    view! {
        <div class="card pickup-row">
            <div class="pickup-row__main">
                <div class="pickup-row__when">
                    <span class="pickup-row__date">"📅 " {record.date}</span>
                    <span class="pickup-row__window">{record.time_window}</span>
                </div>
                <p class="pickup-row__location">"📍 " {record.location}</p>
                <p class="pickup-row__items">{record.items.join(", ")}</p>
            </div>
            <span class=format!("pickup-status {}", record.status.css_modifier())>{record.status.label()}</span>
            {outcome}
        </div>
    }
}

fn pickup_list(records: Vec<&'static PickupRecord>, empty: &'static str) -> impl IntoView {
    if records.is_empty() {
        return view! { <p class="panel__empty">{empty}</p> }.into_any();
    }
    view! { <div class="pickup-list">{records.into_iter().map(pickup_row).collect_view()}</div> }.into_any()
}

#[component]
pub fn PickupsPanel(on_schedule_pickup: Callback<()>) -> impl IntoView {
    let summary = totals(PICKUPS);

    view! {
        <section class="panel panel--pickups">
            <div class="panel__header panel__header--row">
                <div>
                    <h2>"Your Pickups"</h2>
                    <p>"Track upcoming collections and your recycling history"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| on_schedule_pickup.run(())>
                    "+ Schedule Pickup"
                </button>
            </div>

            <div class="stat-grid stat-grid--compact">
                <div class="card stat-card">
                    <div class="stat-card__title">"Upcoming"</div>
                    <p class="stat-card__value">{summary.scheduled}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card__title">"Completed"</div>
                    <p class="stat-card__value">{summary.completed}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card__title">"Total Recycled"</div>
                    <p class="stat-card__value">{weight_label(summary.weight_kg)}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card__title">"Points Earned"</div>
                    <p class="stat-card__value">{group_thousands(summary.points.into())}</p>
                </div>
            </div>

            <h3 class="panel__section-title">"Upcoming Pickups"</h3>
            {pickup_list(scheduled(PICKUPS), "No pickups scheduled.")}

            <h3 class="panel__section-title">"Pickup History"</h3>
            {pickup_list(completed(PICKUPS), "No completed pickups yet.")}
        </section>
    }
}
