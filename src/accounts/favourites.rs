//! Per-user favourite cards

use crate::accounts::{AccountError, Session};
use crate::core::{CardId, UserId};
use crate::loader::CardRepository;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Outcome of a favourites update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteChange {
    Added,
    Removed,
    AlreadyFavourite,
}

impl fmt::Display for FavouriteChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavouriteChange::Added => write!(f, "Added to favourites!"),
            FavouriteChange::Removed => write!(f, "Removed from favourites!"),
            FavouriteChange::AlreadyFavourite => write!(f, "Already in favourites!"),
        }
    }
}

/// A favourite as listed on the favourites page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavouriteCard {
    pub id: CardId,
    pub name: String,
    pub image: String,
}

/// Favourites per user, kept in the order they were added
///
/// Card ids are not checked against the catalog here; listing skips ids
/// the repository no longer knows.
#[derive(Debug, Default)]
pub struct FavouriteStore {
    by_user: FxHashMap<UserId, Vec<CardId>>,
}

impl FavouriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card unless it is already a favourite
    pub fn add(
        &mut self,
        session: &Session,
        card: CardId,
    ) -> std::result::Result<FavouriteChange, AccountError> {
        let user = session.require_user()?;
        let cards = self.by_user.entry(user.clone()).or_default();

        if cards.contains(&card) {
            return Ok(FavouriteChange::AlreadyFavourite);
        }
        cards.push(card);
        debug!(user_id = %user, %card, "favourite added");
        Ok(FavouriteChange::Added)
    }

    /// Add the card if absent, remove it if present
    pub fn toggle(
        &mut self,
        session: &Session,
        card: CardId,
    ) -> std::result::Result<FavouriteChange, AccountError> {
        let user = session.require_user()?;
        let cards = self.by_user.entry(user.clone()).or_default();

        if let Some(pos) = cards.iter().position(|&c| c == card) {
            cards.remove(pos);
            debug!(user_id = %user, %card, "favourite removed");
            Ok(FavouriteChange::Removed)
        } else {
            cards.push(card);
            debug!(user_id = %user, %card, "favourite added");
            Ok(FavouriteChange::Added)
        }
    }

    /// Whether the card is a favourite of the session's user (false when anonymous)
    pub fn contains(&self, session: &Session, card: CardId) -> bool {
        session
            .current_user()
            .and_then(|user| self.by_user.get(user))
            .is_some_and(|cards| cards.contains(&card))
    }

    /// The user's favourite card ids in insertion order
    pub fn card_ids(&self, session: &Session) -> std::result::Result<Vec<CardId>, AccountError> {
        let user = session.require_user()?;
        Ok(self.by_user.get(user).cloned().unwrap_or_default())
    }

    /// The user's favourites joined against the card repository
    pub fn list<R: CardRepository>(
        &self,
        session: &Session,
        repo: &R,
    ) -> Result<Vec<FavouriteCard>> {
        let mut listed = Vec::new();
        for id in self.card_ids(session)? {
            if let Some(card) = repo.card_by_id(id)? {
                listed.push(FavouriteCard {
                    id: card.id,
                    name: card.name.clone(),
                    image: card.image_file().to_string(),
                });
            }
        }
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Category};
    use crate::loader::CardDatabase;
    use crate::CatalogError;

    fn alice() -> Session {
        Session::logged_in(UserId::new("alice-id"), "alice")
    }

    #[test]
    fn test_requires_login() {
        let mut favourites = FavouriteStore::new();
        let anon = Session::anonymous();

        assert_eq!(favourites.add(&anon, CardId::new(1)), Err(AccountError::NotLoggedIn));
        assert_eq!(favourites.toggle(&anon, CardId::new(1)), Err(AccountError::NotLoggedIn));
        assert!(!favourites.contains(&anon, CardId::new(1)));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favourites = FavouriteStore::new();
        let session = alice();

        assert_eq!(favourites.add(&session, CardId::new(1)), Ok(FavouriteChange::Added));
        assert_eq!(
            favourites.add(&session, CardId::new(1)),
            Ok(FavouriteChange::AlreadyFavourite)
        );
        assert_eq!(favourites.card_ids(&session).unwrap(), [CardId::new(1)]);
    }

    #[test]
    fn test_toggle() {
        let mut favourites = FavouriteStore::new();
        let session = alice();

        assert_eq!(favourites.toggle(&session, CardId::new(2)), Ok(FavouriteChange::Added));
        assert!(favourites.contains(&session, CardId::new(2)));
        assert_eq!(favourites.toggle(&session, CardId::new(2)), Ok(FavouriteChange::Removed));
        assert!(!favourites.contains(&session, CardId::new(2)));
        assert_eq!(FavouriteChange::Removed.to_string(), "Removed from favourites!");
    }

    #[test]
    fn test_users_are_isolated() {
        let mut favourites = FavouriteStore::new();
        let bob = Session::logged_in(UserId::new("bob-id"), "bob");

        favourites.add(&alice(), CardId::new(3)).unwrap();
        assert!(!favourites.contains(&bob, CardId::new(3)));
        assert!(favourites.card_ids(&bob).unwrap().is_empty());
    }

    #[test]
    fn test_list_joins_catalog() {
        let db = CardDatabase::from_cards(vec![
            Card::new(1, "Knight", Category::Troop).with_image("img/knight.png"),
            Card::new(2, "Zap", Category::Spell).with_image("img/zap.png"),
        ])
        .unwrap();

        let mut favourites = FavouriteStore::new();
        let session = alice();
        favourites.add(&session, CardId::new(2)).unwrap();
        favourites.add(&session, CardId::new(99)).unwrap();
        favourites.add(&session, CardId::new(1)).unwrap();

        let listed = favourites.list(&session, &db).unwrap();
        let names: Vec<_> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Zap", "Knight"]);
        assert_eq!(listed[0].image, "zap.png");

        let anon = favourites.list(&Session::anonymous(), &db);
        assert!(matches!(anon, Err(CatalogError::Account(AccountError::NotLoggedIn))));
    }
}
