//! Core catalog types

pub mod card;
pub mod entity;
pub mod types;

pub use card::{Card, CardView};
pub use entity::{CardId, UserId};
pub use types::{ArenaTier, Category, Rarity};
