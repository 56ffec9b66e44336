//! SVG line, pie, and grouped-bar charts for the dashboard.
//!
//! Geometry comes from `util::chart`; these views only place it.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::data::impact::{Datum, Series};
use crate::util::chart::{
    PlotArea, Point, VIEWBOX_HEIGHT, VIEWBOX_WIDTH, axis_max, grouped_bars, line_points, pie_slices, polyline_attr,
    slot_center_x, tick_label, y_for, y_ticks,
};

const Y_TICK_COUNT: usize = 4;
const PIE_RADIUS: f64 = 80.0;

/// SVG coordinate attribute value.
fn coord(value: f64) -> String {
    format!("{value:.1}")
}

fn viewbox() -> String {
    format!("0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}")
}

/// Category labels shared by every series, taken from the first one.
fn categories(series: &[Series]) -> &'static [Datum] {
    series.first().map(|s| s.data).unwrap_or_default()
}

fn series_data(series: &[Series]) -> Vec<&'static [Datum]> {
    series.iter().map(|s| s.data).collect()
}

/// Dashed horizontal grid, Y tick labels, and X category labels.
fn axes(max: f64, labels: &'static [Datum], area: PlotArea) -> impl IntoView {
    let grid = y_ticks(max, Y_TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = coord(y_for(tick, max, &area));
            view! {
                <line
                    class="chart__grid"
                    x1=coord(area.left)
                    x2=coord(area.right())
                    y1=y.clone()
                    y2=y.clone()
                    stroke-dasharray="3 3"
                />
                <text class="chart__tick" x=coord(area.left - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                    {tick_label(tick)}
                </text>
            }
        })
        .collect_view();

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, d)| {
            view! {
                <text
                    class="chart__tick"
                    x=coord(slot_center_x(i, labels.len(), &area))
                    y=coord(area.bottom() + 18.0)
                    text-anchor="middle"
                >
                    {d.category}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart__axes">
            {grid}
            {x_labels}
        </g>
    }
}

fn legend(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <ul class="chart__legend">
            {entries
                .into_iter()
                .map(|(name, color)| {
                    view! {
                        <li class="chart__legend-item">
                            <span class="chart__swatch" style=format!("background:{color}")></span>
                            {name}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// One polyline with dot markers per series.
#[component]
pub fn LineChart(series: &'static [Series]) -> impl IntoView {
    let area = PlotArea::DEFAULT;
    let max = axis_max(&series_data(series));

    let lines = series
        .iter()
        .map(|s| {
            let points = line_points(s.data, max, &area);
            let dots = points
                .iter()
                .map(|p| view! { <circle cx=coord(p.x) cy=coord(p.y) r="5" fill=s.color /> })
                .collect_view();
            view! {
                <g class="chart__series">
                    <polyline points=polyline_attr(&points) fill="none" stroke=s.color stroke-width="3" />
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--line">
            <svg viewBox=viewbox() preserveAspectRatio="xMidYMid meet" role="img">
                {axes(max, categories(series), area)}
                {lines}
            </svg>
            {legend(series.iter().map(|s| (s.name, s.color)).collect())}
        </div>
    }
}

/// Wedges labelled `"<category> <percent>%"`; colors cycle if fewer than slices.
#[component]
pub fn PieChart(data: &'static [Datum], colors: &'static [&'static str]) -> impl IntoView {
    let center = Point { x: VIEWBOX_WIDTH / 2.0, y: VIEWBOX_HEIGHT / 2.0 };

    let wedges = pie_slices(data, center, PIE_RADIUS)
        .into_iter()
        .zip(colors.iter().cycle())
        .map(|(slice, color)| {
            let anchor = if slice.label_at.x < center.x { "end" } else { "start" };
            view! {
                <g class="chart__wedge">
                    <path d=slice.path fill=*color />
                    <text
                        class="chart__label"
                        x=coord(slice.label_at.x)
                        y=coord(slice.label_at.y)
                        text-anchor=anchor
                        dominant-baseline="middle"
                    >
                        {pie_label(slice.category, slice.percent)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <svg viewBox=viewbox() preserveAspectRatio="xMidYMid meet" role="img">
                {wedges}
            </svg>
        </div>
    }
}

/// Side-by-side bars per category, one bar per series.
#[component]
pub fn BarChart(series: &'static [Series]) -> impl IntoView {
    let area = PlotArea::DEFAULT;
    let data = series_data(series);
    let max = axis_max(&data);

    let bars = grouped_bars(&data, max, &area)
        .into_iter()
        .zip(series.iter())
        .map(|(rects, s)| {
            rects
                .into_iter()
                .map(|rect| {
                    view! {
                        <rect
                            x=coord(rect.x)
                            y=coord(rect.y)
                            width=coord(rect.width)
                            height=coord(rect.height)
                            rx="4"
                            fill=s.color
                        />
                    }
                })
                .collect_view()
        })
        .collect_view();

    view! {
        <div class="chart chart--bar">
            <svg viewBox=viewbox() preserveAspectRatio="xMidYMid meet" role="img">
                {axes(max, categories(series), area)}
                <g class="chart__bars">{bars}</g>
            </svg>
            {legend(series.iter().map(|s| (s.name, s.color)).collect())}
        </div>
    }
}

fn pie_label(category: &str, percent: f64) -> String {
    format!("{category} {percent:.0}%")
}
