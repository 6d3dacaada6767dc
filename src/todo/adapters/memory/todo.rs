//! In-memory todo repository for service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::todo::{
    domain::{Todo, TodoChanges, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Records are kept in per-owner vectors, so insertion order is preserved
/// naturally and cross-owner probes cannot observe foreign rows by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<HashMap<UserId, Vec<Todo>>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_failure(err: impl ToString) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self, owner: UserId) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_failure)?;
        Ok(state.get(&owner).cloned().unwrap_or_default())
    }

    async fn insert(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let owned = state.entry(todo.owner_id()).or_default();
        if owned.iter().any(|existing| existing.id() == todo.id()) {
            return Err(TodoRepositoryError::DuplicateTodo(todo.id()));
        }
        owned.push(todo.clone());
        Ok(())
    }

    async fn update(
        &self,
        owner: UserId,
        id: TodoId,
        changes: &TodoChanges,
    ) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        // Matching on the owner's vector first is the scoped predicate:
        // a foreign or absent id finds nothing and falls through silently.
        if let Some(todo) = state
            .get_mut(&owner)
            .and_then(|owned| owned.iter_mut().find(|todo| todo.id() == id))
        {
            todo.apply(changes);
        }
        Ok(())
    }

    async fn delete(&self, owner: UserId, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if let Some(owned) = state.get_mut(&owner) {
            owned.retain(|todo| todo.id() != id);
        }
        Ok(())
    }
}
