//! Deck samplers
//!
//! Both samplers draw uniformly without replacement from the caller's RNG
//! and make a single attempt per call. See [`RetryPolicy`](crate::deck::RetryPolicy)
//! for resampling.

use crate::core::{Card, Category};
use crate::deck::{names_distinct, Deck, DeckError, DeckRequest, DECK_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Cards with duplicate names removed, first occurrence kept
pub fn unique_pool(cards: &[Card]) -> Vec<&Card> {
    let mut seen = FxHashSet::default();
    cards
        .iter()
        .filter(|card| seen.insert(card.name.as_str()))
        .collect()
}

/// Draws eight cards from the whole catalog
///
/// Duplicate names in the catalog can end up in the same draw; that draw is
/// reported as [`DeckError::DuplicateNames`] rather than repaired.
pub struct PlainDeckSampler;

impl PlainDeckSampler {
    pub fn sample<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Result<Deck, DeckError> {
        if cards.len() < DECK_SIZE {
            return Err(DeckError::InsufficientCards {
                available: cards.len(),
            });
        }

        let drawn: Vec<Card> = cards.choose_multiple(rng, DECK_SIZE).cloned().collect();
        if !names_distinct(&drawn) {
            debug!(pool = cards.len(), "plain draw hit a duplicate name");
            return Err(DeckError::DuplicateNames);
        }

        Deck::new(drawn)
    }
}

/// Draws a deck with a fixed number of troops, spells and buildings
///
/// Each category is deduplicated by name before drawing, so duplicate rows
/// inside a category never cost a slot. A name shared across two categories
/// can still collide, which the final check reports.
pub struct UniqueDeckSampler;

impl UniqueDeckSampler {
    pub fn sample<R: Rng + ?Sized>(
        request: &DeckRequest,
        troops: &[Card],
        spells: &[Card],
        buildings: &[Card],
        rng: &mut R,
    ) -> Result<Deck, DeckError> {
        request.validate()?;

        let categories: Vec<(&Category, &[Card])> = Category::DECK_CATEGORIES
            .iter()
            .zip([troops, spells, buildings])
            .collect();

        // Raw availability first, for every category, before any drawing
        for &(category, cards) in &categories {
            if request.count(category) > cards.len() {
                return Err(DeckError::InsufficientCategory(category.clone()));
            }
        }

        let mut drawn: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        for &(category, cards) in &categories {
            let count = request.count(category);
            if count == 0 {
                continue;
            }

            let pool = unique_pool(cards);
            debug!(
                %category,
                count,
                pool = pool.len(),
                raw = cards.len(),
                "drawing from unique pool"
            );
            if pool.len() < count {
                return Err(DeckError::InsufficientUniqueCards(category.clone()));
            }

            drawn.extend(pool.choose_multiple(rng, count).map(|&card| card.clone()));
        }

        if !names_distinct(&drawn) {
            debug!("constrained draw has a name shared across categories");
            return Err(DeckError::DuplicateNames);
        }

        Deck::new(drawn)
    }
}
