//! User repository trait defining the interface for user data persistence.
//!
//! Implementations must treat the e-mail address as the natural key: creating
//! a second user with an existing e-mail fails with a validation error on the
//! `email` field, whichever backend is used.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Message reported on `email` when the address is already taken
pub const DUPLICATE_EMAIL_MESSAGE: &str = "user with this email already exists.";

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by e-mail address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this e-mail
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Errors
    /// * `DomainError::Validation` on `email` when the address is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user; `false` when the id is unknown
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether an e-mail address is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Number of stored users
    async fn count(&self) -> Result<u64, DomainError>;
}
