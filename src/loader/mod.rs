//! Card repository and catalog loaders
//!
//! The catalog file is a JSON array of card rows, mirroring the card table.

pub mod database;
pub mod database_async;
pub mod repository;

pub use database::CardDatabase;
pub use database_async::load_catalog;
pub use repository::CardRepository;
