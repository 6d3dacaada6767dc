//! Credential store port for user record persistence.

use crate::auth::domain::User;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// User record persistence contract.
///
/// No update or delete is in scope: user records are immutable once
/// created.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stores a new user record.
    ///
    /// Uniqueness must be enforced atomically at the storage boundary (a
    /// constraint, not a prior read-then-write), so two racing sign-ups for
    /// the same username cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::DuplicateUsername`] when the
    /// username is already taken.
    async fn create_user(&self, user: &User) -> CredentialStoreResult<()>;

    /// Looks up a user record by its unique username.
    ///
    /// Returns `None` when no user with the username exists.
    async fn find_by_username(&self, username: &str) -> CredentialStoreResult<Option<User>>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// A user with the same username already exists.
    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
