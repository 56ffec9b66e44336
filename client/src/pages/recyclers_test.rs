use super::*;

#[test]
fn tag_button_class_highlights_selection() {
    assert_eq!(tag_button_class(true), "tag-button tag-button--selected");
    assert_eq!(tag_button_class(false), "tag-button");
}

#[test]
fn default_filter_selects_all_and_shows_every_recycler() {
    let filter = RecyclerFilter::default();
    assert!(filter.is_tag_selected(None));
    assert_eq!(filter.apply(RECYCLERS).len(), RECYCLERS.len());
    assert_eq!(results_summary(RECYCLERS.len(), RECYCLERS.len()), "Showing 5 of 5 recyclers");
}
