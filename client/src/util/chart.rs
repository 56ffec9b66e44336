//! SVG geometry for the dashboard charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Charts are a pure rendering sink: series go in, geometry comes out, and
//! nothing flows back into application state. Keeping the math here lets the
//! `components::charts` views stay declarative and keeps the geometry testable
//! without a DOM.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::data::impact::Datum;

/// Plot area inside the SVG viewbox, leaving room for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const DEFAULT: Self = Self { left: 40.0, top: 10.0, width: 340.0, height: 200.0 };

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

pub const VIEWBOX_WIDTH: f64 = 400.0;
pub const VIEWBOX_HEIGHT: f64 = 240.0;

/// Rounded-up axis maximum so the tallest sample sits below the top edge.
///
/// Steps through 1/2/5 x 10^n and returns the first "nice" value at or above
/// the input. Non-positive input yields 1 so scaling never divides by zero.
pub fn nice_ceiling(max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    for step in [1.0, 2.0, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Axis maximum across several series.
pub fn axis_max(series: &[&[Datum]]) -> f64 {
    let max = series
        .iter()
        .flat_map(|data| data.iter().map(|d| d.value))
        .fold(0.0_f64, f64::max);
    nice_ceiling(max)
}

/// Evenly spaced Y-axis tick values from 0 to `max`, inclusive.
#[allow(clippy::cast_precision_loss)]
pub fn y_ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

pub fn y_for(value: f64, max: f64, area: &PlotArea) -> f64 {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    area.bottom() - ratio * area.height
}

/// Center x of category slot `index` out of `count`.
#[allow(clippy::cast_precision_loss)]
pub fn slot_center_x(index: usize, count: usize, area: &PlotArea) -> f64 {
    if count == 0 {
        return area.left;
    }
    let slot = area.width / count as f64;
    area.left + slot * (index as f64 + 0.5)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Points of one line series, one per category slot.
pub fn line_points(data: &[Datum], max: f64, area: &PlotArea) -> Vec<Point> {
    data.iter()
        .enumerate()
        .map(|(i, d)| Point { x: slot_center_x(i, data.len(), area), y: y_for(d.value, max, area) })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grouped bars: slot `i` holds one bar per series side by side.
#[allow(clippy::cast_precision_loss)]
pub fn grouped_bars(series: &[&[Datum]], max: f64, area: &PlotArea) -> Vec<Vec<BarRect>> {
    let groups = series.iter().map(|s| s.len()).max().unwrap_or_default();
    if groups == 0 || series.is_empty() {
        return series.iter().map(|_| Vec::new()).collect();
    }
    let slot = area.width / groups as f64;
    let inner = slot * 0.7;
    let bar_width = inner / series.len() as f64;

    series
        .iter()
        .enumerate()
        .map(|(s_idx, data)| {
            data.iter()
                .enumerate()
                .map(|(i, d)| {
                    let y = y_for(d.value, max, area);
                    BarRect {
                        x: area.left + slot * i as f64 + (slot - inner) / 2.0 + bar_width * s_idx as f64,
                        y,
                        width: bar_width,
                        height: area.bottom() - y,
                    }
                })
                .collect()
        })
        .collect()
}

/// One wedge of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub category: &'static str,
    pub percent: f64,
    pub path: String,
    pub label_at: Point,
}

/// Pie wedges starting at 12 o'clock, clockwise. Zero-total input is empty.
pub fn pie_slices(data: &[Datum], center: Point, radius: f64) -> Vec<PieSlice> {
    let total = data.iter().map(|d| d.value.max(0.0)).sum::<f64>();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    data.iter()
        .map(|d| {
            let fraction = d.value.max(0.0) / total;
            let sweep = fraction * TAU;
            let end = start + sweep;
            let mid = start + sweep / 2.0;
            let slice = PieSlice {
                category: d.category,
                percent: fraction * 100.0,
                path: wedge_path(center, radius, start, end),
                label_at: polar(center, radius * 1.25, mid),
            };
            start = end;
            slice
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point { x: center.x + radius * angle.cos(), y: center.y + radius * angle.sin() }
}

fn wedge_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    // A single arc cannot draw a full circle; split it into two halves.
    if sweep >= TAU - 1e-9 {
        let a = polar(center, radius, start);
        let b = polar(center, radius, start + TAU / 2.0);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            a.x,
            a.y,
            b.x,
            b.y,
            a.x,
            a.y,
            r = radius
        );
    }
    let from = polar(center, radius, start);
    let to = polar(center, radius, end);
    let large_arc = u8::from(sweep > TAU / 2.0);
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z",
        center.x,
        center.y,
        from.x,
        from.y,
        to.x,
        to.y,
        r = radius
    )
}

/// Short axis label: whole numbers without a decimal point.
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
