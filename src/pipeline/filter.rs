//! Text and type predicates.

use crate::domain::CollectionItem;
use crate::view::TypeFilter;

/// Normalizes a free-text query: trimmed and lowercased.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns whether `item` passes a normalized text query.
///
/// An empty query passes everything. Otherwise the query must be a substring
/// of the lowercased name, of the raw id, or of the number. The id comparison
/// is case-sensitive against the already-lowercased query.
#[must_use]
pub fn matches_query(item: &CollectionItem, normalized: &str) -> bool {
    normalized.is_empty()
        || item.name.to_lowercase().contains(normalized)
        || item.id.contains(normalized)
        || item.number.contains(normalized)
}

/// Returns whether `item` passes the type filter (exact tag match).
#[must_use]
pub fn matches_type(item: &CollectionItem, filter: TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Only(tag) => item.has_type(tag.as_str()),
    }
}

/// Returns the items that pass both predicates, in input order.
#[must_use]
pub fn select<'a>(
    items: &'a [CollectionItem],
    query: &str,
    filter: TypeFilter,
) -> Vec<&'a CollectionItem> {
    let normalized = normalize_query(query);
    items
        .iter()
        .filter(|item| matches_query(item, &normalized) && matches_type(item, filter))
        .collect()
}
