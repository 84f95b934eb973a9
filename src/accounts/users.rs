//! Registration and login

use crate::accounts::{AccountError, PasswordHasher, Session};
use crate::core::UserId;
use tracing::{debug, info};

const MAX_USERNAME_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 100;
const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 32;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Stored credential, opaque to this crate
    pub password: String,
}

/// In-memory user table
pub struct UserStore<H> {
    users: Vec<User>,
    hasher: H,
}

impl<H: PasswordHasher> UserStore<H> {
    pub fn new(hasher: H) -> Self {
        UserStore {
            users: Vec::new(),
            hasher,
        }
    }

    /// Insert an existing row as-is (the stored credential is not rehashed)
    pub fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    /// Register a new user and log them in
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AccountError> {
        let username = username.trim();
        let email = email.trim();

        if self
            .users
            .iter()
            .any(|u| u.username == username || u.email == email)
        {
            return Err(AccountError::AlreadyExists);
        }
        validate_email(email)?;
        validate_username(username)?;
        validate_password(password)?;

        let user = User {
            id: UserId::generate(),
            username: username.to_string(),
            email: email.to_string(),
            password: self.hasher.hash(password),
        };
        info!(user_id = %user.id, username, "registered user");

        let session = Session::logged_in(user.id.clone(), user.username.clone());
        self.users.push(user);
        Ok(session)
    }

    /// Log in by username or email
    ///
    /// Rows holding a plaintext credential (from before hashing was
    /// introduced) are accepted when it equals the password.
    pub fn login(&self, identifier: &str, password: &str) -> Result<Session, AccountError> {
        let identifier = identifier.trim();

        let user = self
            .users
            .iter()
            .find(|u| u.username == identifier || u.email == identifier)
            .ok_or(AccountError::InvalidCredentials)?;

        if user.password == password || self.hasher.verify(&user.password, password) {
            debug!(user_id = %user.id, "login succeeded");
            Ok(Session::logged_in(user.id.clone(), user.username.clone()))
        } else {
            debug!(user_id = %user.id, "login rejected");
            Err(AccountError::InvalidCredentials)
        }
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn validate_email(email: &str) -> Result<(), AccountError> {
    if email.chars().count() > MAX_EMAIL_LEN || !email.contains('@') || !email.contains('.') {
        return Err(AccountError::InvalidEmail);
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<(), AccountError> {
    let len = username.chars().count();
    if len == 0 || len > MAX_USERNAME_LEN || !username.chars().all(char::is_alphanumeric) {
        return Err(AccountError::InvalidUsername);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AccountError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(AccountError::InvalidPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reversible stand-in for a real hash
    struct ReverseHasher;

    impl PasswordHasher for ReverseHasher {
        fn hash(&self, password: &str) -> String {
            format!("rev${}", password.chars().rev().collect::<String>())
        }

        fn verify(&self, stored: &str, password: &str) -> bool {
            stored == self.hash(password)
        }
    }

    fn store() -> UserStore<ReverseHasher> {
        UserStore::new(ReverseHasher)
    }

    #[test]
    fn test_register_and_login() {
        let mut users = store();
        let session = users.register(" alice ", "alice@example.com", "hunter22").unwrap();
        assert_eq!(session.username(), Some("alice"));

        let id = session.current_user().unwrap().clone();
        let stored = users.user(&id).unwrap();
        assert_eq!(stored.password, "rev$22retnuh");

        let by_name = users.login("alice", "hunter22").unwrap();
        let by_email = users.login("alice@example.com", "hunter22").unwrap();
        assert_eq!(by_name, session);
        assert_eq!(by_email, session);

        assert_eq!(users.login("alice", "wrong-pass"), Err(AccountError::InvalidCredentials));
        assert_eq!(users.login("bob", "hunter22"), Err(AccountError::InvalidCredentials));
    }

    #[test]
    fn test_plaintext_legacy_rows() {
        let mut users = store();
        users.insert(User {
            id: UserId::new("legacy"),
            username: "old".to_string(),
            email: "old@example.com".to_string(),
            password: "letmein".to_string(),
        });

        let session = users.login("old", "letmein").unwrap();
        assert_eq!(session.current_user(), Some(&UserId::new("legacy")));
    }

    #[test]
    fn test_duplicates_checked_first() {
        let mut users = store();
        users.register("alice", "alice@example.com", "hunter22").unwrap();

        assert_eq!(
            users.register("alice", "other@example.com", "hunter22"),
            Err(AccountError::AlreadyExists)
        );
        // Bad username too, but the taken email is reported
        assert_eq!(
            users.register("not valid!", "alice@example.com", "x"),
            Err(AccountError::AlreadyExists)
        );
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_validation_rules() {
        let mut users = store();

        let long_email = format!("{}@example.com", "b".repeat(100));
        let long_name = "b".repeat(21);
        let long_password = "p".repeat(33);

        let cases = [
            ("bob", "bob-at-example", "hunter22", AccountError::InvalidEmail),
            ("bob", "bob@example", "hunter22", AccountError::InvalidEmail),
            ("bob", long_email.as_str(), "hunter22", AccountError::InvalidEmail),
            ("bob smith", "bob@example.com", "hunter22", AccountError::InvalidUsername),
            (long_name.as_str(), "bob@example.com", "hunter22", AccountError::InvalidUsername),
            ("   ", "bob@example.com", "hunter22", AccountError::InvalidUsername),
            ("bob", "bob@example.com", "short", AccountError::InvalidPassword),
            ("bob", "bob@example.com", long_password.as_str(), AccountError::InvalidPassword),
        ];
        for (username, email, password, expected) in cases {
            assert_eq!(
                users.register(username, email, password),
                Err(expected),
                "{username:?} / {email:?}"
            );
        }

        assert!(users.is_empty());
        assert!(users.register(&"b".repeat(20), "bob@example.com", "123456").is_ok());
    }
}
