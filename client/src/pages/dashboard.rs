//! Dashboard tab: headline stats, impact charts, and the collection map.

use leptos::prelude::*;

use crate::components::charts::{BarChart, LineChart, PieChart};
use crate::components::collection_map::CollectionMap;
use crate::components::stat_card::StatCard;
use crate::data::impact::{CO2_SAVED, COLLECTED, HEADLINE_STATS, RECYCLED, Series, TREES, WASTE_TYPE_COLORS, WASTE_TYPES};

const COLLECTION_TRENDS: &[Series] = &[COLLECTED, RECYCLED];
const ENVIRONMENTAL_IMPACT: &[Series] = &[CO2_SAVED, TREES];

#[component]
fn ChartCard(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <p class="card__description">{description}</p>
            </div>
            <div class="card__content">{children()}</div>
        </div>
    }
}

#[component]
pub fn DashboardPanel(on_schedule_pickup: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel panel--dashboard">
            <div class="stat-grid">
                {HEADLINE_STATS.iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
            </div>

            <div class="chart-grid">
                <ChartCard title="Collection Trends" description="Monthly e-waste collection and recycling progress">
                    <LineChart series=COLLECTION_TRENDS />
                </ChartCard>
                <ChartCard title="Waste Type Distribution" description="Breakdown of collected e-waste by category">
                    <PieChart data=WASTE_TYPES colors=WASTE_TYPE_COLORS />
                </ChartCard>
            </div>

            <ChartCard title="Environmental Impact" description="CO₂ saved and equivalent trees planted through recycling">
                <BarChart series=ENVIRONMENTAL_IMPACT />
            </ChartCard>

            <ChartCard title="Collection Network" description="Active e-waste collection points across Telangana">
                <CollectionMap />
            </ChartCard>

            <div class="card card--cta">
                <div class="card__header">
                    <h3 class="card__title">"📈 Schedule a Pickup"</h3>
                    <p class="card__description">
                        "Have e-waste at home? Schedule a free pickup from our authorized collectors and earn eco-points."
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| on_schedule_pickup.run(())>
                    "Schedule Pickup Now"
                </button>
            </div>
        </section>
    }
}
