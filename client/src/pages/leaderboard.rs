//! Leaderboard tab: ranked contributors per timeframe and achievement tiers.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::data::leaderboard::{ACHIEVEMENT_TIERS, LeaderboardEntry, Podium, Timeframe, entries, podium};
use crate::util::counter::group_thousands;

/// Trophy for first, medals for second and third, `#n` otherwise.
fn rank_badge(rank: u32) -> String {
    match podium(rank) {
        Some(Podium::Gold) => "🏆".to_owned(),
        Some(Podium::Silver) => "🥈".to_owned(),
        Some(Podium::Bronze) => "🥉".to_owned(),
        None => format!("#{rank}"),
    }
}

fn row_class(rank: u32) -> &'static str {
    match podium(rank) {
        Some(_) => "leaderboard__row leaderboard__row--podium",
        None => "leaderboard__row",
    }
}

fn leaderboard_row(entry: &'static LeaderboardEntry) -> impl IntoView {
    view! {
        <div class=row_class(entry.rank)>
            <div class="leaderboard__who">
                <span class="leaderboard__rank">{rank_badge(entry.rank)}</span>
                <span class="leaderboard__avatar">{entry.initials}</span>
                <div>
                    <p class="leaderboard__name">{entry.name}</p>
                    <p class="leaderboard__weight">{format!("{} kg collected", entry.weight_kg)}</p>
                </div>
            </div>
            <div class="leaderboard__stats">
                <div class="leaderboard__points">
                    <p class="leaderboard__points-value">{group_thousands(entry.points.into())}</p>
                    <p class="leaderboard__points-label">"eco points"</p>
                </div>
                <span class="leaderboard__streak" title="Day streak">
                    "🔥 " {entry.streak}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn LeaderboardPanel() -> impl IntoView {
    let timeframe = RwSignal::new(Timeframe::default());

    let selector = Timeframe::ALL
        .iter()
        .copied()
        .map(|tf| {
            view! {
                <button
                    class="tag-button"
                    class:tag-button--selected=move || timeframe.get() == tf
                    on:click=move |_| timeframe.set(tf)
                >
                    {tf.label()}
                </button>
            }
        })
        .collect_view();

    let tiers = ACHIEVEMENT_TIERS
        .iter()
        .map(|tier| {
            view! {
                <div class="card tier-card">
                    <p class="tier-card__icon">{tier.icon}</p>
                    <p class="tier-card__title">{tier.title}</p>
                    <p class="tier-card__description">{format!("Collect {} kg of e-waste", tier.threshold_kg)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="panel panel--leaderboard">
            <div class="panel__header">
                <h2>"Leaderboard"</h2>
                <p>"Top contributors to e-waste recycling in Telangana"</p>
            </div>

            <div class="filter-bar__tags">{selector}</div>

            <div class="card leaderboard">
                <div class="card__header">
                    <h3 class="card__title">"Top Contributors"</h3>
                    <p class="card__description">"Ranked by eco-points earned"</p>
                </div>
                <div class="leaderboard__rows">
                    {move || entries(timeframe.get()).iter().map(leaderboard_row).collect_view()}
                </div>
            </div>

            <h3 class="panel__section-title">"Achievements"</h3>
            <div class="tier-grid">{tiers}</div>
        </section>
    }
}
