//! Fuzzy name suggestions

use crate::core::{Card, CardId};
use crate::search::similarity::ratio;
use serde::Serialize;
use tracing::debug;

/// Minimum similarity for a card to be suggested
pub const SUGGEST_THRESHOLD: f64 = 0.6;

/// A suggested card, as sent to the search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: CardId,
    pub name: String,
}

/// Suggest every card whose lowercased name is similar enough to the query
///
/// Results keep repository order; they are not ranked by score.
pub fn suggest(query: &str, cards: &[Card]) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let suggestions: Vec<Suggestion> = cards
        .iter()
        .filter(|card| ratio(&query, &card.name.to_lowercase()) >= SUGGEST_THRESHOLD)
        .map(|card| Suggestion {
            id: card.id,
            name: card.name.clone(),
        })
        .collect();

    debug!(%query, candidates = cards.len(), hits = suggestions.len(), "autocomplete");
    suggestions
}
