//! bcrypt hashing, run on the blocking thread pool

use crate::errors::{DomainError, DomainResult};

/// Hash `password` with the given bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> DomainResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(DomainError::internal)?
        .map_err(DomainError::internal)
}

/// Check `password` against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> DomainResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(DomainError::internal)
}
