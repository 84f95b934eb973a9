//! Royale Catalog - card catalog, fuzzy search and deck building
//!
//! Resolves free-text queries to cards, suggests names as the user types,
//! and draws random decks (plain or with per-category counts) from a card
//! catalog. Accounts and favourites sit on top of the same catalog.

pub mod accounts;
pub mod catalog;
pub mod core;
pub mod deck;
pub mod error;
pub mod loader;
pub mod search;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
