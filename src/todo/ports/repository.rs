//! Repository port for ownership-scoped todo persistence.

use crate::auth::domain::UserId;
use crate::todo::domain::{Todo, TodoChanges, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every operation takes the authenticated owner as its first argument,
/// supplied by the service after session resolution; no user-controlled
/// owner value ever reaches an implementation. Mutations use a scoped
/// predicate over both todo id and owner id: when zero rows match —
/// whether the id is foreign or simply absent — the operation completes
/// without error and without effect. Callers cannot distinguish "not
/// found" from "not yours", which is intentional information hiding.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every todo owned by the user, in insertion order.
    ///
    /// Presentation ordering is the ordering policy's responsibility, not
    /// the repository's; insertion order is only the stable-sort input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the lookup fails.
    async fn list(&self, owner: UserId) -> TodoRepositoryResult<Vec<Todo>>;

    /// Stores a new todo record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTodo`] when the todo ID
    /// already exists.
    async fn insert(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Rewrites a todo matched by both id and owner.
    ///
    /// A non-owned or absent id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the write fails.
    async fn update(
        &self,
        owner: UserId,
        id: TodoId,
        changes: &TodoChanges,
    ) -> TodoRepositoryResult<()>;

    /// Deletes a todo matched by both id and owner.
    ///
    /// A non-owned or absent id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the write fails.
    async fn delete(&self, owner: UserId, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
