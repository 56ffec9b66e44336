use super::*;

#[test]
fn warnings_use_the_accent_badge() {
    assert!(badge_class(ResourceKind::Warning).ends_with("--accent"));
    assert!(badge_class(ResourceKind::Video).ends_with("--secondary"));
    assert_eq!(badge_class(ResourceKind::Article), badge_class(ResourceKind::Tip));
}
