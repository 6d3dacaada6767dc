//! User record aggregate for the auth domain.

use super::{AuthDomainError, UserId};
use serde::{Deserialize, Serialize};

/// Stored user record.
///
/// Immutable after creation: usernames are never renamed and records are
/// never deleted in this core. The password hash is treated as an opaque
/// string produced and consumed by the password-scheme port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: String,
}

impl User {
    /// Creates a new user record with a freshly assigned identifier.
    ///
    /// The username is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyUsername`] if the username is empty
    /// after trimming.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let raw = username.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuthDomainError::EmptyUsername);
        }

        Ok(Self {
            id: UserId::new(),
            username: trimmed.to_owned(),
            password_hash: password_hash.into(),
        })
    }

    /// Reconstructs a user record from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: UserId, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the opaque password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
