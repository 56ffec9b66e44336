use super::*;
use crate::data::recyclers::RECYCLERS;

fn ids(list: &[&RecyclerRecord]) -> Vec<u32> {
    list.iter().map(|r| r.id).collect()
}

// =============================================================
// query
// =============================================================

#[test]
fn empty_query_without_tag_returns_full_list_in_order() {
    let all = filter_recyclers(RECYCLERS, "", None);
    assert_eq!(ids(&all), RECYCLERS.iter().map(|r| r.id).collect::<Vec<_>>());
}

#[test]
fn query_matches_name_case_insensitively() {
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "greentech", None)), vec![1]);
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "ECORECYCLE", None)), vec![2]);
}

#[test]
fn query_matches_location() {
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "jubilee", None)), vec![3]);
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "warangal", None)), vec![5]);
}

#[test]
fn query_matching_many_keeps_source_order() {
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "hyderabad", None)), vec![1, 2, 3, 4]);
}

#[test]
fn query_result_is_exactly_the_matching_subset() {
    for q in ["e", "hub", "hills", "zzz", "Re"] {
        let expected = RECYCLERS
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&q.to_lowercase())
                    || r.location.to_lowercase().contains(&q.to_lowercase())
            })
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids(&filter_recyclers(RECYCLERS, q, None)), expected, "query {q:?}");
    }
}

#[test]
fn unmatched_query_returns_empty() {
    assert!(filter_recyclers(RECYCLERS, "mumbai", None).is_empty());
}

// =============================================================
// tag
// =============================================================

#[test]
fn tag_filter_is_exact_membership() {
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "", Some("Electronics"))), vec![1]);
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "", Some("All Electronics"))), vec![3]);
}

#[test]
fn tag_filter_is_not_substring_or_case_insensitive() {
    assert!(filter_recyclers(RECYCLERS, "", Some("Electron")).is_empty());
    assert!(filter_recyclers(RECYCLERS, "", Some("phones")).is_empty());
}

#[test]
fn query_and_tag_combine_with_and() {
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "", Some("Batteries"))), vec![3, 4]);
    assert_eq!(ids(&filter_recyclers(RECYCLERS, "secunderabad", Some("Batteries"))), vec![4]);
    assert!(filter_recyclers(RECYCLERS, "greentech", Some("Batteries")).is_empty());
}

#[test]
fn filter_struct_matches_free_function() {
    let filter = RecyclerFilter { query: "hills".to_owned(), tag: Some("Phones".to_owned()) };
    assert_eq!(ids(&filter.apply(RECYCLERS)), vec![2]);
    assert_eq!(RecyclerFilter::default().apply(RECYCLERS).len(), RECYCLERS.len());
}

#[test]
fn tag_selection_check() {
    let filter = RecyclerFilter::default();
    assert!(filter.is_tag_selected(None));
    assert!(!filter.is_tag_selected(Some("Phones")));
}

// =============================================================
// tags
// =============================================================

#[test]
fn specialization_tags_dedupe_in_first_appearance_order() {
    assert_eq!(
        specialization_tags(RECYCLERS),
        vec!["Electronics", "Appliances", "Computers", "Phones", "All Electronics", "Batteries"]
    );
}

#[test]
fn specialization_tags_of_empty_list() {
    assert!(specialization_tags(&[]).is_empty());
}

#[test]
fn results_summary_text() {
    assert_eq!(results_summary(2, 5), "Showing 2 of 5 recyclers");
}
