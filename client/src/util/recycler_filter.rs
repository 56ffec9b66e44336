//! Search and specialization filtering over the recycler directory.

#[cfg(test)]
#[path = "recycler_filter_test.rs"]
mod recycler_filter_test;

use crate::data::recyclers::RecyclerRecord;

/// Current search box text and selected specialization tag (`None` = "All").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecyclerFilter {
    pub query: String,
    pub tag: Option<String>,
}

impl RecyclerFilter {
    pub fn apply<'a>(&self, recyclers: &'a [RecyclerRecord]) -> Vec<&'a RecyclerRecord> {
        filter_recyclers(recyclers, &self.query, self.tag.as_deref())
    }

    pub fn is_tag_selected(&self, tag: Option<&str>) -> bool {
        self.tag.as_deref() == tag
    }
}

/// Stable filter: name or location contains `query` case-insensitively, AND
/// the specialization list contains `tag` exactly. Empty query and `None` tag
/// each pass everything.
pub fn filter_recyclers<'a>(
    recyclers: &'a [RecyclerRecord],
    query: &str,
    tag: Option<&str>,
) -> Vec<&'a RecyclerRecord> {
    let needle = query.to_lowercase();
    recyclers
        .iter()
        .filter(|r| matches_query(r, &needle) && matches_tag(r, tag))
        .collect()
}

fn matches_query(recycler: &RecyclerRecord, needle: &str) -> bool {
    needle.is_empty()
        || recycler.name.to_lowercase().contains(needle)
        || recycler.location.to_lowercase().contains(needle)
}

fn matches_tag(recycler: &RecyclerRecord, tag: Option<&str>) -> bool {
    tag.is_none_or(|tag| recycler.specializations.contains(&tag))
}

/// Deduplicated union of every specialization, in order of first appearance.
pub fn specialization_tags(recyclers: &[RecyclerRecord]) -> Vec<&'static str> {
    let mut tags = Vec::new();
    for tag in recyclers.iter().flat_map(|r| r.specializations.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub fn results_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} recyclers")
}
