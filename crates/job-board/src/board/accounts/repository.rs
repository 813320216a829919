use super::domain::{User, UserId};
use crate::board::RepositoryError;

/// Storage abstraction for accounts. Emails are unique ignoring case.
pub trait UserRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the email is already registered.
    fn insert(&self, user: User) -> Result<User, RepositoryError>;
    fn fetch(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
