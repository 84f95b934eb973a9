//! Per-category counts for constrained deck building

use crate::core::Category;
use crate::deck::{DeckError, DECK_SIZE};
use serde::{Deserialize, Serialize};

/// How many troops, spells and buildings a deck should contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub troop: usize,
    pub spell: usize,
    pub building: usize,
}

impl DeckRequest {
    pub fn new(troop: usize, spell: usize, building: usize) -> Self {
        DeckRequest {
            troop,
            spell,
            building,
        }
    }

    pub fn total(&self) -> usize {
        self.troop.saturating_add(self.spell).saturating_add(self.building)
    }

    /// Requested count for a category (zero for categories outside the deck split)
    pub fn count(&self, category: &Category) -> usize {
        match category {
            Category::Troop => self.troop,
            Category::Spell => self.spell,
            Category::Building => self.building,
            Category::Other(_) => 0,
        }
    }

    /// Fails unless the counts add up to a full deck
    pub fn validate(&self) -> Result<(), DeckError> {
        let total = self.total();
        if total != DECK_SIZE {
            return Err(DeckError::InvalidTotal { total });
        }
        Ok(())
    }
}
