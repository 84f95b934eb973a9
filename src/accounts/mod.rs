//! User accounts, sessions and favourites
//!
//! Identity is never ambient: every operation that needs a user takes a
//! [`Session`] explicitly. Password hashing is delegated to whatever
//! [`PasswordHasher`] the embedding application provides.

pub mod favourites;
pub mod users;

pub use favourites::{FavouriteCard, FavouriteChange, FavouriteStore};
pub use users::{User, UserStore};

use crate::core::UserId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username or email already exists.")]
    AlreadyExists,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Username must be up to 20 letters or numbers.")]
    InvalidUsername,

    #[error("Password must be 6-32 characters.")]
    InvalidPassword,

    #[error("Invalid username/email or password.")]
    InvalidCredentials,

    #[error("You need to log in first.")]
    NotLoggedIn,
}

/// Password hashing primitive supplied by the application
pub trait PasswordHasher {
    /// Produce the credential to store for a new password
    fn hash(&self, password: &str) -> String;

    /// Check a password against a stored credential
    fn verify(&self, stored: &str, password: &str) -> bool;
}

/// Who is making the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<(UserId, String)>,
}

impl Session {
    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn logged_in(user_id: UserId, username: impl Into<String>) -> Self {
        Session {
            user: Some((user_id, username.into())),
        }
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.user.as_ref().map(|(id, _)| id)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|(_, name)| name.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The current user, or `NotLoggedIn`
    pub fn require_user(&self) -> Result<&UserId, AccountError> {
        self.current_user().ok_or(AccountError::NotLoggedIn)
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
