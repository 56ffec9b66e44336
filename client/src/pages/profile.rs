//! Profile tab: personal stats, achievements, neighbourhood ranking, settings.
//!
//! Notification toggles are local to this panel and reset when it unmounts.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::data::profile::{
    ACHIEVEMENTS, Achievement, DISPLAY_NAME, MEMBER_SINCE, NOTIFICATION_SETTINGS, OWN_RANK, PROFILE_STATS, RANKING,
};
use crate::util::counter::group_thousands;

fn profile_subtitle() -> String {
    format!("Member since {MEMBER_SINCE} • Rank #{OWN_RANK}")
}

fn achievement_class(achievement: &Achievement) -> &'static str {
    if achievement.unlocked { "card achievement-card" } else { "card achievement-card achievement-card--locked" }
}

#[component]
pub fn ProfilePanel(on_logout: Callback<()>) -> impl IntoView {
    let stats = PROFILE_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="profile-stat">
                    <p class="profile-stat__label">{stat.label}</p>
                    <p class=format!("profile-stat__value profile-stat__value--{}", stat.accent)>{stat.value}</p>
                    <p class="profile-stat__note">{stat.note}</p>
                </div>
            }
        })
        .collect_view();

    let achievements = ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            view! {
                <div class=achievement_class(achievement)>
                    <div class="achievement-card__icon">{achievement.glyph}</div>
                    <p class="achievement-card__title">{achievement.title}</p>
                    <p class="achievement-card__description">{achievement.description}</p>
                    {(!achievement.unlocked).then(|| view! { <p class="achievement-card__locked">"Locked"</p> })}
                </div>
            }
        })
        .collect_view();

    let ranking = RANKING
        .iter()
        .map(|row| {
            view! {
                <tr class="ranking__row" class:ranking__row--self=row.is_self>
                    <td>{format!("{} #{}", row.badge, row.rank)}</td>
                    <td>{row.name}</td>
                    <td class="ranking__points">{group_thousands(row.points.into())}</td>
                    <td class="ranking__weight">{format!("{} kg", row.weight_kg)}</td>
                </tr>
            }
        })
        .collect_view();

    let settings = NOTIFICATION_SETTINGS
        .iter()
        .map(|setting| {
            let enabled = RwSignal::new(setting.enabled_by_default);
            view! {
                <label class="settings__row">
                    <span>{setting.label}</span>
                    <input
                        type="checkbox"
                        prop:checked=move || enabled.get()
                        on:change=move |ev| enabled.set(event_target_checked(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="panel panel--profile">
            <div class="card profile-header">
                <div class="profile-header__top">
                    <div class="profile-header__identity">
                        <span class="profile-header__avatar">"U"</span>
                        <div>
                            <h2 class="card__title">{format!("Welcome, {DISPLAY_NAME}!")}</h2>
                            <p class="card__description">{profile_subtitle()}</p>
                        </div>
                    </div>
                    <div class="profile-header__actions">
                        <button type="button" class="btn btn--outline btn--sm">
                            "✎ Edit Profile"
                        </button>
                        <button class="btn btn--outline btn--sm btn--danger" on:click=move |_| on_logout.run(())>
                            "⎋ Logout"
                        </button>
                    </div>
                </div>
                <div class="profile-stat-grid">{stats}</div>
            </div>

            <h3 class="panel__section-title">"Your Achievements"</h3>
            <div class="achievement-grid">{achievements}</div>

            <h3 class="panel__section-title">"Leaderboard"</h3>
            <div class="card ranking">
                <table class="ranking__table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Name"</th>
                            <th>"Eco Points"</th>
                            <th>"E-Waste"</th>
                        </tr>
                    </thead>
                    <tbody>{ranking}</tbody>
                </table>
            </div>

            <div class="card settings">
                <h3 class="card__title">"⚙ Settings"</h3>
                {settings}
            </div>
        </section>
    }
}
