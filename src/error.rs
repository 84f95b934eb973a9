//! Error types for the card catalog

use crate::accounts::AccountError;
use crate::core::CardId;
use crate::deck::DeckError;
use crate::search::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
