//! Todo aggregate root and its update payload.

use super::{Priority, TodoDomainError, TodoId};
use crate::auth::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// The owner is set at creation and never reassigned; every mutation goes
/// through a storage predicate that re-checks it. Serialized field names
/// follow the wire contract the presentation layer reads (`task` for the
/// title, `user_id` for the owner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    #[serde(rename = "user_id")]
    owner_id: UserId,
    #[serde(rename = "task")]
    title: String,
    deadline: Option<NaiveDate>,
    priority: Priority,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted owner reference.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted priority level.
    pub priority: Priority,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new incomplete todo owned by the given user.
    ///
    /// The title is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] if the title is empty after
    /// trimming; nothing reaches storage in that case.
    pub fn new(
        owner_id: UserId,
        title: impl Into<String>,
        deadline: Option<NaiveDate>,
        priority: Priority,
        clock: &impl Clock,
    ) -> Result<Self, TodoDomainError> {
        let title = validated_title(title)?;
        Ok(Self {
            id: TodoId::new(),
            owner_id,
            title,
            deadline,
            priority,
            is_completed: false,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            deadline: data.deadline,
            priority: data.priority,
            is_completed: data.is_completed,
            created_at: data.created_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a validated update payload in place.
    ///
    /// Identifier, owner, and creation timestamp are untouched.
    pub fn apply(&mut self, changes: &TodoChanges) {
        self.title = changes.title().to_owned();
        self.is_completed = changes.is_completed();
        self.deadline = changes.deadline();
        self.priority = changes.priority();
    }
}

/// Validated update payload for an existing todo.
///
/// Construction enforces the same title rule as creation, so an update
/// can never blank out a title that storage requires to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    title: String,
    is_completed: bool,
    deadline: Option<NaiveDate>,
    priority: Priority,
}

impl TodoChanges {
    /// Creates a validated update payload.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        is_completed: bool,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<Self, TodoDomainError> {
        Ok(Self {
            title: validated_title(title)?,
            is_completed,
            deadline,
            priority,
        })
    }

    /// Returns the replacement title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the replacement completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the replacement deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the replacement priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

fn validated_title(title: impl Into<String>) -> Result<String, TodoDomainError> {
    let raw = title.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
