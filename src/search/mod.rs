//! Card search: exact-match resolution and fuzzy autocomplete
//!
//! Exact match jumps to one card and reports `NoMatch` otherwise;
//! autocomplete returns a possibly empty list.

pub mod autocomplete;
pub mod normalize;
pub mod resolver;
pub mod similarity;

pub use autocomplete::{suggest, Suggestion, SUGGEST_THRESHOLD};
pub use normalize::normalize_name;
pub use resolver::{query_len, resolve, MAX_QUERY_LEN};
pub use similarity::ratio;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Your search is too long ({len} characters). Please enter {max} characters or less.", max = MAX_QUERY_LEN)]
    InvalidQuery { len: usize },

    #[error("No card matches your search")]
    NoMatch,
}
