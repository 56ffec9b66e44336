//! Headline stat card with an animated value.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::data::impact::{HeadlineStat, StatIcon};

fn icon_glyph(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Check => "✔",
        StatIcon::Award => "🏅",
        StatIcon::Alert => "⚠",
        StatIcon::Zap => "⚡",
    }
}

fn icon_class(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Check | StatIcon::Zap => "stat-card__icon stat-card__icon--primary",
        StatIcon::Award => "stat-card__icon stat-card__icon--secondary",
        StatIcon::Alert => "stat-card__icon stat-card__icon--accent",
    }
}

#[component]
pub fn StatCard(stat: &'static HeadlineStat) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__title">
                <span class=icon_class(stat.icon)>{icon_glyph(stat.icon)}</span>
                {stat.title}
            </div>
            <p class="stat-card__value">
                <AnimatedCounter value=stat.value prefix=stat.prefix suffix=stat.suffix />
            </p>
            <p class="stat-card__note">{stat.note}</p>
        </div>
    }
}
