use super::*;

#[test]
fn rank_badge_decorates_podium_only() {
    assert_eq!(rank_badge(1), "🏆");
    assert_eq!(rank_badge(2), "🥈");
    assert_eq!(rank_badge(3), "🥉");
    assert_eq!(rank_badge(4), "#4");
}

#[test]
fn row_class_highlights_top_three() {
    assert!(row_class(3).contains("--podium"));
    assert!(!row_class(5).contains("--podium"));
}
