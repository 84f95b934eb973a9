//! In-memory card database
//!
//! Stands in for the external card table. Loaded once from a JSON catalog
//! (an array of card rows) and immutable afterwards.

use crate::core::{Card, CardId, Category};
use crate::loader::CardRepository;
use crate::{CatalogError, Result};
use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::{debug, info};

/// Card table held in memory, preserving catalog row order
#[derive(Debug, Clone, Default)]
pub struct CardDatabase {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from card rows, rejecting duplicate ids
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut db = CardDatabase::new();
        for card in cards {
            db.add_card(card)?;
        }
        Ok(db)
    }

    /// Load a catalog file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Catalog not found: {path:?}"),
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let db = Self::parse(&contents)?;
        info!(path = %path.display(), cards = db.len(), "loaded card catalog");
        Ok(db)
    }

    /// Parse a catalog from its JSON text
    pub fn parse(contents: &str) -> Result<Self> {
        let rows: Vec<Card> = serde_json::from_str(contents)?;
        Self::from_cards(rows)
    }

    /// Append a card row
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        if self.by_id.contains_key(&card.id) {
            return Err(CatalogError::InvalidCatalog(format!(
                "duplicate card id {} ({})",
                card.id, card.name
            )));
        }

        self.by_id.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Look up a card by id without cloning
    pub fn get_card(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&idx| &self.cards[idx])
    }

    /// Iterate in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Total number of cards in database
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardRepository for CardDatabase {
    fn all_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn cards_by_category(&self, category: &Category) -> Result<Vec<Card>> {
        let cards: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| card.is_category(category))
            .cloned()
            .collect();
        debug!(%category, count = cards.len(), "category query");
        Ok(cards)
    }

    fn card_by_id(&self, id: CardId) -> Result<Option<Card>> {
        Ok(self.get_card(id).cloned())
    }
}
