//! In-memory session store.
//!
//! Sessions are capabilities with no durability requirement, so this
//! adapter is the production choice as well as the test one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{Session, SessionToken},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store keyed by token.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty in-memory session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> SessionStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(session.token().clone(), session);
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> SessionStoreResult<Option<Session>> {
        let state = self.state.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(token).cloned())
    }

    async fn remove(&self, token: &SessionToken) -> SessionStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Absent tokens fall through silently; revocation is idempotent.
        state.remove(token);
        Ok(())
    }
}
