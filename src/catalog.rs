//! Request-facing catalog operations
//!
//! Every operation reads fresh card data from the repository and hands it to
//! the pure search and deck functions. Nothing is cached between calls.

use crate::accounts::{FavouriteChange, FavouriteStore, Session};
use crate::core::{Card, CardId, CardView, Category};
use crate::deck::{Deck, DeckRequest, PlainDeckSampler, RetryPolicy, UniqueDeckSampler};
use crate::loader::CardRepository;
use crate::search::{self, query_len, SearchError, Suggestion, MAX_QUERY_LEN};
use crate::{CatalogError, Result};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Result of the card list page with an optional search box query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Browse {
    /// The query named a card; go straight to it
    Jump(CardId),
    /// Show the whole catalog. `notice` says why a query did not jump.
    List {
        cards: Vec<CardView>,
        notice: Option<SearchError>,
    },
}

/// A card detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPage {
    pub card: CardView,
    pub is_favourite: bool,
}

/// Two cards side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub left: CardView,
    pub right: CardView,
}

impl Comparison {
    /// Elixir cost of the left card minus the right one
    pub fn elixir_difference(&self) -> i16 {
        i16::from(self.left.elixir_cost) - i16::from(self.right.elixir_cost)
    }
}

/// Catalog operations over a card repository
pub struct Catalog<R> {
    repo: R,
}

impl<R: CardRepository> Catalog<R> {
    pub fn new(repo: R) -> Self {
        Catalog { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Resolve a search box query to a single card
    ///
    /// Over-long queries are rejected before the catalog is read.
    pub fn resolve_search(&self, query: &str) -> Result<CardId> {
        let query = query.trim();
        let len = query_len(query);
        if len > MAX_QUERY_LEN {
            debug!(len, "rejecting over-long search query");
            return Err(SearchError::InvalidQuery { len }.into());
        }
        if query.is_empty() {
            return Err(SearchError::NoMatch.into());
        }

        let cards = self.repo.all_cards()?;
        search::resolve(query, &cards).ok_or_else(|| SearchError::NoMatch.into())
    }

    /// Fuzzy suggestions for a partial query
    pub fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let cards = self.repo.all_cards()?;
        Ok(search::suggest(query, &cards))
    }

    /// Every card, in catalog order
    pub fn list_cards(&self) -> Result<Vec<CardView>> {
        Ok(self.repo.all_cards()?.iter().map(CardView::from).collect())
    }

    /// The card list page: jump to a matching card, or list everything
    pub fn browse(&self, query: &str) -> Result<Browse> {
        let notice = match self.resolve_search(query) {
            Ok(id) => return Ok(Browse::Jump(id)),
            Err(CatalogError::Search(SearchError::NoMatch)) if query.trim().is_empty() => None,
            Err(CatalogError::Search(e)) => Some(e),
            Err(e) => return Err(e),
        };

        Ok(Browse::List {
            cards: self.list_cards()?,
            notice,
        })
    }

    pub fn card_details(&self, id: CardId) -> Result<CardView> {
        self.fetch(id).map(|card| CardView::from(&card))
    }

    /// Details plus whether the session's user has favourited the card
    pub fn card_page(
        &self,
        id: CardId,
        session: &Session,
        favourites: &FavouriteStore,
    ) -> Result<CardPage> {
        Ok(CardPage {
            card: self.card_details(id)?,
            is_favourite: favourites.contains(session, id),
        })
    }

    /// Both cards, or `None` if either id is unknown
    pub fn compare_cards(&self, left: CardId, right: CardId) -> Result<Option<Comparison>> {
        let left = self.repo.card_by_id(left)?;
        let right = self.repo.card_by_id(right)?;

        Ok(match (left, right) {
            (Some(left), Some(right)) => Some(Comparison {
                left: CardView::from(&left),
                right: CardView::from(&right),
            }),
            _ => None,
        })
    }

    /// Favourite a card that exists in the catalog
    pub fn add_favourite(
        &self,
        id: CardId,
        session: &Session,
        favourites: &mut FavouriteStore,
    ) -> Result<FavouriteChange> {
        session.require_user()?;
        self.fetch(id)?;
        Ok(favourites.add(session, id)?)
    }

    /// Toggle a favourite from the card page
    pub fn toggle_favourite(
        &self,
        id: CardId,
        session: &Session,
        favourites: &mut FavouriteStore,
    ) -> Result<FavouriteChange> {
        session.require_user()?;
        self.fetch(id)?;
        Ok(favourites.toggle(session, id)?)
    }

    /// Eight random cards from the whole catalog, one attempt
    pub fn build_plain_deck<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<Deck> {
        self.build_plain_deck_with_retry(RetryPolicy::once(), rng)
    }

    /// Eight random cards from the whole catalog, redrawing on duplicate names
    pub fn build_plain_deck_with_retry<G: Rng + ?Sized>(
        &self,
        policy: RetryPolicy,
        rng: &mut G,
    ) -> Result<Deck> {
        let cards = self.repo.all_cards()?;
        Ok(policy.run(|_| PlainDeckSampler::sample(&cards, &mut *rng))?)
    }

    /// A deck with the given number of troops, spells and buildings
    ///
    /// Counts that do not add up to a full deck are rejected before the
    /// catalog is read.
    pub fn build_constrained_deck<G: Rng + ?Sized>(
        &self,
        troop: usize,
        spell: usize,
        building: usize,
        rng: &mut G,
    ) -> Result<Deck> {
        self.build_deck(&DeckRequest::new(troop, spell, building), rng)
    }

    pub fn build_deck<G: Rng + ?Sized>(&self, request: &DeckRequest, rng: &mut G) -> Result<Deck> {
        request.validate()?;

        let troops = self.repo.cards_by_category(&Category::Troop)?;
        let spells = self.repo.cards_by_category(&Category::Spell)?;
        let buildings = self.repo.cards_by_category(&Category::Building)?;

        Ok(UniqueDeckSampler::sample(request, &troops, &spells, &buildings, rng)?)
    }

    fn fetch(&self, id: CardId) -> Result<Card> {
        self.repo.card_by_id(id)?.ok_or(CatalogError::CardNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountError;
    use crate::core::UserId;
    use crate::deck::DeckError;
    use crate::loader::CardDatabase;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn catalog() -> Catalog<CardDatabase> {
        let db = CardDatabase::from_cards(vec![
            Card::new(1, "Knight", Category::Troop).with_elixir_cost(3),
            Card::new(2, "P.E.K.K.A", Category::Troop).with_elixir_cost(7),
            Card::new(3, "Zap", Category::Spell).with_elixir_cost(2),
            Card::new(4, "Cannon", Category::Building).with_elixir_cost(3),
        ])
        .unwrap();
        Catalog::new(db)
    }

    #[test]
    fn test_resolve_search() {
        let catalog = catalog();
        assert_eq!(catalog.resolve_search("  pekka ").unwrap(), CardId::new(2));
        assert!(matches!(
            catalog.resolve_search("golem"),
            Err(CatalogError::Search(SearchError::NoMatch))
        ));
        assert!(matches!(
            catalog.resolve_search(&"k".repeat(31)),
            Err(CatalogError::Search(SearchError::InvalidQuery { len: 31 }))
        ));
    }

    #[test]
    fn test_browse() {
        let catalog = catalog();
        assert_eq!(catalog.browse("zap").unwrap(), Browse::Jump(CardId::new(3)));

        match catalog.browse("").unwrap() {
            Browse::List { cards, notice } => {
                assert_eq!(cards.len(), 4);
                assert_eq!(notice, None);
            }
            other => panic!("unexpected {other:?}"),
        }

        match catalog.browse("golem").unwrap() {
            Browse::List { notice, .. } => assert_eq!(notice, Some(SearchError::NoMatch)),
            other => panic!("unexpected {other:?}"),
        }

        match catalog.browse(&"z".repeat(40)).unwrap() {
            Browse::List { cards, notice } => {
                assert_eq!(cards.len(), 4);
                assert_eq!(notice, Some(SearchError::InvalidQuery { len: 40 }));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_card_details_and_compare() {
        let catalog = catalog();
        assert_eq!(catalog.card_details(CardId::new(4)).unwrap().name, "Cannon");
        assert!(matches!(
            catalog.card_details(CardId::new(50)),
            Err(CatalogError::CardNotFound(id)) if id == CardId::new(50)
        ));

        let comparison = catalog.compare_cards(CardId::new(2), CardId::new(3)).unwrap().unwrap();
        assert_eq!(comparison.left.name, "P.E.K.K.A");
        assert_eq!(comparison.elixir_difference(), 5);

        assert!(catalog.compare_cards(CardId::new(2), CardId::new(50)).unwrap().is_none());
    }

    #[test]
    fn test_favourites_through_catalog() {
        let catalog = catalog();
        let mut favourites = FavouriteStore::new();
        let session = Session::logged_in(UserId::new("u1"), "alice");

        assert_eq!(
            catalog.toggle_favourite(CardId::new(1), &session, &mut favourites).unwrap(),
            FavouriteChange::Added
        );
        assert!(catalog.card_page(CardId::new(1), &session, &favourites).unwrap().is_favourite);
        let anonymous = Session::anonymous();
        assert!(!catalog.card_page(CardId::new(1), &anonymous, &favourites).unwrap().is_favourite);

        assert_eq!(
            catalog.add_favourite(CardId::new(1), &session, &mut favourites).unwrap(),
            FavouriteChange::AlreadyFavourite
        );
        assert!(matches!(
            catalog.add_favourite(CardId::new(77), &session, &mut favourites),
            Err(CatalogError::CardNotFound(_))
        ));
        assert!(matches!(
            catalog.toggle_favourite(CardId::new(1), &Session::anonymous(), &mut favourites),
            Err(CatalogError::Account(AccountError::NotLoggedIn))
        ));
    }

    #[test]
    fn test_plain_deck_needs_eight() {
        let catalog = catalog();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(matches!(
            catalog.build_plain_deck(&mut rng),
            Err(CatalogError::Deck(DeckError::InsufficientCards { available: 4 }))
        ));
    }

    #[test]
    fn test_constrained_deck_errors_surface() {
        let catalog = catalog();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(matches!(
            catalog.build_constrained_deck(4, 3, 1, &mut rng),
            Err(CatalogError::Deck(DeckError::InsufficientCategory(Category::Troop)))
        ));
        assert!(matches!(
            catalog.build_constrained_deck(1, 1, 1, &mut rng),
            Err(CatalogError::Deck(DeckError::InvalidTotal { total: 3 }))
        ));
    }
}
