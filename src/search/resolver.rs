//! Exact-match name resolution

use crate::core::{Card, CardId};
use crate::search::normalize::normalize_name;
use tracing::debug;

/// Longest query accepted by the exact-match path, in characters
pub const MAX_QUERY_LEN: usize = 30;

/// Length of a query as the length bound counts it
pub fn query_len(query: &str) -> usize {
    query.chars().count()
}

/// Resolve free text to the first card whose normalized name equals the
/// normalized query.
///
/// Returns `None` for over-long queries and for queries with no letters at
/// all; callers are expected to reject over-long queries before getting here.
pub fn resolve(query: &str, cards: &[Card]) -> Option<CardId> {
    if query_len(query) > MAX_QUERY_LEN {
        return None;
    }

    let key = normalize_name(query);
    if key.is_empty() {
        return None;
    }

    let found = cards
        .iter()
        .find(|card| normalize_name(&card.name) == key)
        .map(|card| card.id);

    debug!(%key, candidates = cards.len(), ?found, "resolved search query");
    found
}
