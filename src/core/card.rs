//! Card records and their outward projection

use crate::core::{ArenaTier, CardId, Category, Rarity};
use serde::{Deserialize, Serialize};

/// A card row from the catalog
///
/// Cards are read-only snapshots; every operation fetches a fresh copy from
/// the repository. Field names on the wire follow the catalog columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Card name (e.g., "Hog Rider"). Unique by convention only.
    pub name: String,

    #[serde(rename = "type")]
    pub category: Category,

    pub elixir_cost: u8,

    pub arena_unlocked: ArenaTier,

    pub rarity: Rarity,

    /// Image path as stored. Only the file name is ever shown.
    #[serde(rename = "image", default)]
    pub image_path: String,
}

impl Card {
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        Card {
            id: CardId::new(id),
            name: name.into(),
            category,
            elixir_cost: 0,
            arena_unlocked: ArenaTier::from(0u32),
            rarity: Rarity::Common,
            image_path: String::new(),
        }
    }

    pub fn with_elixir_cost(mut self, elixir_cost: u8) -> Self {
        self.elixir_cost = elixir_cost;
        self
    }

    pub fn with_arena(mut self, arena: impl Into<ArenaTier>) -> Self {
        self.arena_unlocked = arena.into();
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    pub fn is_category(&self, category: &Category) -> bool {
        &self.category == category
    }

    /// Final path segment of the image path ("static/img/knight.png" -> "knight.png")
    pub fn image_file(&self) -> &str {
        self.image_path.rsplit('/').next().unwrap_or("")
    }
}

/// What callers get to render: a card with its image reduced to a file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub elixir_cost: u8,
    pub arena_unlocked: ArenaTier,
    pub rarity: Rarity,
    pub image: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        CardView {
            id: card.id,
            name: card.name.clone(),
            category: card.category.clone(),
            elixir_cost: card.elixir_cost,
            arena_unlocked: card.arena_unlocked.clone(),
            rarity: card.rarity.clone(),
            image: card.image_file().to_string(),
        }
    }
}
