use super::*;

use crate::data::impact::{COLLECTED, RECYCLED};

#[test]
fn coord_rounds_to_one_decimal() {
    assert_eq!(coord(12.345), "12.3");
    assert_eq!(coord(40.0), "40.0");
}

#[test]
fn viewbox_matches_chart_dimensions() {
    assert_eq!(viewbox(), "0 0 400 240");
}

#[test]
fn categories_come_from_first_series() {
    let labels: Vec<_> = categories(&[COLLECTED, RECYCLED]).iter().map(|d| d.category).collect();
    assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    assert!(categories(&[]).is_empty());
}

#[test]
fn pie_label_shows_whole_percent() {
    assert_eq!(pie_label("Phones", 35.0), "Phones 35%");
    assert_eq!(pie_label("Laptops", 24.6), "Laptops 25%");
}
