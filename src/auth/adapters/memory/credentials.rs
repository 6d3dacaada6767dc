//! In-memory credential store for auth service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::User,
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};

/// Thread-safe in-memory credential store keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    state: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty in-memory credential store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored user records.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn user_count(&self) -> CredentialStoreResult<usize> {
        let state = self.state.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.len())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_user(&self, user: &User) -> CredentialStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Duplicate check and insert happen under one write lock, matching
        // the atomicity a unique constraint gives the database adapter.
        if state.contains_key(user.username()) {
            return Err(CredentialStoreError::DuplicateUsername(
                user.username().to_owned(),
            ));
        }
        state.insert(user.username().to_owned(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> CredentialStoreResult<Option<User>> {
        let state = self.state.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(username).cloned())
    }
}
