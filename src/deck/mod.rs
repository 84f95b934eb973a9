//! Random deck building
//!
//! A deck is always exactly eight cards with pairwise distinct names. Two
//! samplers produce them: a plain one drawing from the whole catalog and a
//! constrained one honouring per-category counts.

pub mod request;
pub mod retry;
pub mod sampler;

pub use request::DeckRequest;
pub use retry::RetryPolicy;
pub use sampler::{unique_pool, PlainDeckSampler, UniqueDeckSampler};

use crate::core::{Card, CardView, Category};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

/// Number of cards in a deck
pub const DECK_SIZE: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("The total number of cards must be exactly {size} (got {total}).", size = DECK_SIZE)]
    InvalidTotal { total: usize },

    #[error("Sorry, there are not enough cards in the game to make a deck of {size} (only {available}).", size = DECK_SIZE)]
    InsufficientCards { available: usize },

    #[error("Not enough {0} cards.")]
    InsufficientCategory(Category),

    #[error("Sorry, not enough unique {0} cards.")]
    InsufficientUniqueCards(Category),

    #[error("Sorry, there are not enough unique cards to make a deck of {size}.", size = DECK_SIZE)]
    DuplicateNames,
}

/// Eight cards with distinct names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: SmallVec<[Card; DECK_SIZE]>,
}

impl Deck {
    /// Assemble a deck, checking size and name uniqueness
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let cards: SmallVec<[Card; DECK_SIZE]> = cards.into_iter().collect();

        if cards.len() != DECK_SIZE {
            return Err(DeckError::InsufficientCards {
                available: cards.len(),
            });
        }
        if !names_distinct(&cards) {
            return Err(DeckError::DuplicateNames);
        }

        Ok(Deck { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many cards of a category the deck holds
    pub fn count_of(&self, category: &Category) -> usize {
        self.cards.iter().filter(|c| c.is_category(category)).count()
    }

    pub fn views(&self) -> Vec<CardView> {
        self.cards.iter().map(CardView::from).collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// True if no two cards share a name
pub(crate) fn names_distinct(cards: &[Card]) -> bool {
    let mut seen = FxHashSet::default();
    cards.iter().all(|card| seen.insert(card.name.as_str()))
}
