use super::*;

#[test]
fn scheduled_keeps_source_order() {
    let ids = scheduled(PICKUPS).iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn completed_excludes_scheduled() {
    assert!(completed(PICKUPS).iter().all(|r| r.status == PickupStatus::Completed));
    assert_eq!(completed(PICKUPS).len(), 3);
}

#[test]
fn totals_only_count_completed_weight_and_points() {
    let t = totals(PICKUPS);
    assert_eq!(t.scheduled, 2);
    assert_eq!(t.completed, 3);
    assert_eq!(t.points, 550);
    assert!((t.weight_kg - 55.0).abs() < f64::EPSILON);
}

#[test]
fn totals_of_empty_slice_is_zero() {
    assert_eq!(totals(&[]), PickupTotals::default());
}

#[test]
fn ids_are_unique() {
    let mut ids = PICKUPS.iter().map(|r| r.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PICKUPS.len());
}

#[test]
fn status_labels_are_distinct() {
    assert_ne!(PickupStatus::Scheduled.label(), PickupStatus::Completed.label());
}
