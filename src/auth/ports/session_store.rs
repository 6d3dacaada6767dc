//! Session store port for active session records.

use crate::auth::domain::{Session, SessionToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Active session persistence contract.
///
/// Sessions are capabilities, not durable data: implementations may keep
/// them entirely in process memory.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a freshly issued session, keyed by its token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when the store cannot be
    /// written.
    async fn insert(&self, session: Session) -> SessionStoreResult<()>;

    /// Looks up the session a token resolves to.
    ///
    /// Returns `None` for unknown or already-revoked tokens.
    async fn find(&self, token: &SessionToken) -> SessionStoreResult<Option<Session>>;

    /// Removes the session for the given token.
    ///
    /// Removing an absent token is a no-op, not an error; revocation must
    /// be idempotent and safe to call with a stale token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when the store cannot be
    /// written.
    async fn remove(&self, token: &SessionToken) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
