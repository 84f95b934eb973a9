//! Read-only access to the card table
//!
//! The real card table lives in an external store. Everything in this crate
//! reads cards through this trait and never caches what it gets back.

use crate::core::{Card, CardId, Category};
use crate::Result;

/// Provider of card snapshots
pub trait CardRepository {
    /// Every card, in repository order
    fn all_cards(&self) -> Result<Vec<Card>>;

    /// Cards of one category, in repository order
    fn cards_by_category(&self, category: &Category) -> Result<Vec<Card>>;

    /// A single card, or `None` if the id is unknown
    fn card_by_id(&self, id: CardId) -> Result<Option<Card>>;
}

impl<R: CardRepository + ?Sized> CardRepository for &R {
    fn all_cards(&self) -> Result<Vec<Card>> {
        (**self).all_cards()
    }

    fn cards_by_category(&self, category: &Category) -> Result<Vec<Card>> {
        (**self).cards_by_category(category)
    }

    fn card_by_id(&self, id: CardId) -> Result<Option<Card>> {
        (**self).card_by_id(id)
    }
}

impl<R: CardRepository + ?Sized> CardRepository for std::sync::Arc<R> {
    fn all_cards(&self) -> Result<Vec<Card>> {
        (**self).all_cards()
    }

    fn cards_by_category(&self, category: &Category) -> Result<Vec<Card>> {
        (**self).cards_by_category(category)
    }

    fn card_by_id(&self, id: CardId) -> Result<Option<Card>> {
        (**self).card_by_id(id)
    }
}
