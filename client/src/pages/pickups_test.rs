use super::*;

#[test]
fn weight_label_drops_trailing_zero() {
    assert_eq!(weight_label(18.0), "18 kg");
    assert_eq!(weight_label(32.5), "32.5 kg");
    assert_eq!(weight_label(0.0), "0 kg");
}

#[test]
fn history_totals_render_as_labels() {
    let summary = totals(PICKUPS);
    assert_eq!(weight_label(summary.weight_kg), "55 kg");
    assert_eq!(group_thousands(summary.points.into()), "550");
}
