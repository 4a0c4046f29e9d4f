use std::collections::HashSet;

/// Shortest description (exclusive) worth surfacing as a suggestion.
const MIN_DESCRIPTION_LEN: usize = 20;
/// Cap on the returned suggestion list.
const MAX_SUGGESTIONS: usize = 10;

/// Derive the "more suggestions" list from the flat activity text.
///
/// Document order is kept; duplicates are dropped case-insensitively
/// (first spelling wins); short descriptions are filtered out; at most
/// ten entries are returned.
pub fn extract_suggestions(raw_descriptions: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    raw_descriptions
        .iter()
        .map(|description| description.trim())
        .filter(|description| description.chars().count() > MIN_DESCRIPTION_LEN)
        .filter(|description| seen.insert(description.to_lowercase()))
        .map(|description| description.to_string())
        .take(MAX_SUGGESTIONS)
        .collect()
}
