//! Regional map with collection-point markers positioned in percent space.

#[cfg(test)]
#[path = "collection_map_test.rs"]
mod collection_map_test;

use leptos::prelude::*;

use crate::data::collection_points::{COLLECTION_POINTS, CollectionPoint, REGION_OUTLINE};

fn marker_style(point: &CollectionPoint) -> String {
    format!("left:{}%;top:{}%", point.x_pct, point.y_pct)
}

#[component]
pub fn CollectionMap() -> impl IntoView {
    let markers = COLLECTION_POINTS
        .iter()
        .enumerate()
        .map(|(index, point)| {
            view! {
                <div
                    class="map__marker"
                    style=format!("{};animation-delay:{}ms", marker_style(point), index * 100)
                    title=format!("{}: {} tons collected", point.name, point.tons)
                >
                    <span class="map__pulse"></span>
                    <span class="map__dot"></span>
                    <div class="map__tooltip">
                        <p class="map__tooltip-name">{point.name}</p>
                        <p class="map__tooltip-count">{format!("{} tons collected", point.tons)}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="map">
            <svg class="map__grid" viewBox="0 0 100 100" preserveAspectRatio="none">
                <defs>
                    <pattern id="map-grid" width="10" height="10" patternUnits="userSpaceOnUse">
                        <path d="M 10 0 L 0 0 0 10" fill="none" stroke="currentColor" stroke-width="0.5" />
                    </pattern>
                </defs>
                <rect width="100" height="100" fill="url(#map-grid)" />
            </svg>
            <svg class="map__outline" viewBox="0 0 100 100" preserveAspectRatio="none">
                <path d=REGION_OUTLINE fill="none" stroke="currentColor" stroke-width="0.5" />
            </svg>
            <div class="map__markers">{markers}</div>
            <div class="map__legend">
                <div class="map__legend-row">
                    <span class="map__legend-dot"></span>
                    <span>"Collection Points"</span>
                </div>
                <p>"Hover to see details"</p>
            </div>
            <div class="map__info">
                <p class="map__info-title">"📍 Active Collection Points"</p>
                <p class="map__info-note">{format!("{} locations across Telangana", COLLECTION_POINTS.len())}</p>
            </div>
        </div>
    }
}
