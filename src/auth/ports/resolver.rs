//! Session resolver port: the single gate in front of todo operations.

use crate::auth::domain::{SessionToken, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Resolves bearer tokens into authenticated user identifiers.
///
/// Every todo operation calls this first; the resolved identifier is the
/// only source of an owner id anywhere downstream.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolves a token to the user it is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveSessionError::Unauthorized`] for unknown, revoked,
    /// or expired tokens, uniformly.
    async fn resolve(&self, token: &SessionToken) -> Result<UserId, ResolveSessionError>;
}

/// Errors returned while resolving a session token.
#[derive(Debug, Clone, Error)]
pub enum ResolveSessionError {
    /// The token does not resolve to an active session.
    #[error("unauthorized")]
    Unauthorized,

    /// Session lookup failed at the store.
    #[error("session lookup failed: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),
}
