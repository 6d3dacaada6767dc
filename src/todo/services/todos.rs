//! Todo orchestration service: list, create, update, and delete.
//!
//! Every operation resolves the caller's session token before touching the
//! repository; an unauthorized token short-circuits with no data access.
//! The owner id is derived exclusively from the resolved session, so a
//! caller can neither create nor claim a todo on another user's behalf.

use crate::auth::{
    domain::SessionToken,
    ports::{ResolveSessionError, SessionResolver},
};
use crate::todo::{
    domain::{self, Priority, Todo, TodoChanges, TodoDomainError, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    title: String,
    deadline: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl CreateTodoRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            deadline: None,
            priority: None,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority; left unset it defaults to medium.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for rewriting an existing todo.
///
/// Toggle is not a separate primitive: a caller flips the completion flag
/// it last read and submits it here. Two concurrent toggles therefore
/// race, last write wins (accepted; see the crate design notes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    title: String,
    is_completed: bool,
    deadline: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl UpdateTodoRequest {
    /// Creates a request with the required title and completion flag.
    #[must_use]
    pub fn new(title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            title: title.into(),
            is_completed,
            deadline: None,
            priority: None,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority; left unset it defaults to medium.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The session token did not resolve to an authenticated user.
    #[error("unauthorized")]
    Unauthorized,

    /// Domain validation failed; nothing was written.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),

    /// Session lookup failed at the store.
    #[error("session lookup failed: {0}")]
    Sessions(Arc<dyn std::error::Error + Send + Sync>),
}

impl From<ResolveSessionError> for TodoServiceError {
    fn from(err: ResolveSessionError) -> Self {
        match err {
            ResolveSessionError::Unauthorized => Self::Unauthorized,
            ResolveSessionError::Store(inner) => Self::Sessions(inner),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Session-gated todo orchestration service.
#[derive(Clone)]
pub struct TodoService<R, A, K>
where
    R: TodoRepository,
    A: SessionResolver,
    K: Clock + Send + Sync,
{
    repository: Arc<R>,
    sessions: Arc<A>,
    clock: Arc<K>,
}

impl<R, A, K> TodoService<R, A, K>
where
    R: TodoRepository,
    A: SessionResolver,
    K: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, sessions: Arc<A>, clock: Arc<K>) -> Self {
        Self {
            repository,
            sessions,
            clock,
        }
    }

    /// Lists the caller's todos in canonical presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthorized`] for an invalid token and
    /// [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, token: &SessionToken) -> TodoServiceResult<Vec<Todo>> {
        let owner = self.sessions.resolve(token).await?;
        let mut todos = self.repository.list(owner).await?;
        domain::sort_for_display(&mut todos);
        Ok(todos)
    }

    /// Creates a todo owned by the caller and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthorized`] for an invalid token,
    /// [`TodoServiceError::Validation`] for a blank title, and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        token: &SessionToken,
        request: CreateTodoRequest,
    ) -> TodoServiceResult<Todo> {
        let owner = self.sessions.resolve(token).await?;
        let todo = Todo::new(
            owner,
            request.title,
            request.deadline,
            request.priority.unwrap_or_default(),
            &*self.clock,
        )?;
        self.repository.insert(&todo).await?;
        debug!(todo_id = %todo.id(), "todo created");
        Ok(todo)
    }

    /// Rewrites a todo the caller owns.
    ///
    /// A foreign or absent id completes without error and without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthorized`] for an invalid token,
    /// [`TodoServiceError::Validation`] for a blank title, and
    /// [`TodoServiceError::Repository`] when the write fails.
    pub async fn update(
        &self,
        token: &SessionToken,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<()> {
        let owner = self.sessions.resolve(token).await?;
        let changes = TodoChanges::new(
            request.title,
            request.is_completed,
            request.deadline,
            request.priority.unwrap_or_default(),
        )?;
        self.repository.update(owner, id, &changes).await?;
        debug!(todo_id = %id, "todo updated");
        Ok(())
    }

    /// Deletes a todo the caller owns.
    ///
    /// A foreign or absent id completes without error and without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthorized`] for an invalid token and
    /// [`TodoServiceError::Repository`] when the write fails.
    pub async fn delete(&self, token: &SessionToken, id: TodoId) -> TodoServiceResult<()> {
        let owner = self.sessions.resolve(token).await?;
        self.repository.delete(owner, id).await?;
        debug!(todo_id = %id, "todo deleted");
        Ok(())
    }
}
