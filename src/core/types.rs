//! Strongly-typed wrappers for card attributes
//!
//! The catalog stores these as free-form strings. Known values get their own
//! variants; anything else is kept verbatim so that no row is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card category (the `type` column of the catalog)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Troop,
    Spell,
    Building,
    Other(String),
}

impl Category {
    /// Categories used for constrained deck building, in processing order
    pub const DECK_CATEGORIES: &'static [Category] =
        &[Category::Troop, Category::Spell, Category::Building];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Troop => "Troop",
            Category::Spell => "Spell",
            Category::Building => "Building",
            Category::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Troop" => Category::Troop,
            "Spell" => Category::Spell,
            "Building" => Category::Building,
            _ => Category::Other(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Card rarity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
    Other(String),
}

impl Rarity {
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Champion => "Champion",
            Rarity::Other(label) => label,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Common" => Rarity::Common,
            "Rare" => Rarity::Rare,
            "Epic" => Rarity::Epic,
            "Legendary" => Rarity::Legendary,
            "Champion" => Rarity::Champion,
            _ => Rarity::Other(s),
        }
    }
}

impl From<&str> for Rarity {
    fn from(s: &str) -> Self {
        Rarity::from(s.to_string())
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Arena in which a card unlocks
///
/// Older catalog exports store a bare arena number, newer ones a label such
/// as "Training Camp". Both are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawArenaTier")]
pub struct ArenaTier(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawArenaTier {
    Number(i64),
    Label(String),
}

impl From<RawArenaTier> for ArenaTier {
    fn from(raw: RawArenaTier) -> Self {
        match raw {
            RawArenaTier::Number(n) => ArenaTier(n.to_string()),
            RawArenaTier::Label(label) => ArenaTier(label),
        }
    }
}

impl ArenaTier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArenaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArenaTier {
    fn from(s: &str) -> Self {
        ArenaTier(s.to_string())
    }
}

impl From<u32> for ArenaTier {
    fn from(n: u32) -> Self {
        ArenaTier(n.to_string())
    }
}
