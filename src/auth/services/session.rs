//! Session issuance service: sign-up, login, resolve, and revoke.

use crate::auth::{
    domain::{AuthDomainError, Session, SessionToken, User, UserId},
    ports::{
        CredentialStore, CredentialStoreError, PasswordScheme, PasswordSchemeError,
        ResolveSessionError, SessionResolver, SessionStore, SessionStoreError,
    },
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// Login failed.
    ///
    /// Deliberately conflates "no such user" and "wrong password" so the
    /// response cannot be used for username enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Sign-up collided with an existing username.
    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] AuthDomainError),

    /// The password primitive failed.
    #[error(transparent)]
    Hashing(#[from] PasswordSchemeError),

    /// Credential storage failed.
    #[error(transparent)]
    Credentials(CredentialStoreError),

    /// Session storage failed.
    #[error(transparent)]
    Sessions(#[from] SessionStoreError),
}

impl From<CredentialStoreError> for SessionServiceError {
    fn from(err: CredentialStoreError) -> Self {
        match err {
            CredentialStoreError::DuplicateUsername(username) => {
                Self::DuplicateUsername(username)
            }
            other => Self::Credentials(other),
        }
    }
}

/// Result type for session service operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Session issuance and revocation service.
///
/// Owns the per-session state machine: unauthenticated until login mints
/// a token, active while the token remains in the store, revoked once
/// logout removes it. There is no refresh or renewal.
#[derive(Clone)]
pub struct SessionService<C, S, H, K>
where
    C: CredentialStore,
    S: SessionStore,
    H: PasswordScheme,
    K: Clock + Send + Sync,
{
    credentials: Arc<C>,
    sessions: Arc<S>,
    passwords: Arc<H>,
    clock: Arc<K>,
}

impl<C, S, H, K> SessionService<C, S, H, K>
where
    C: CredentialStore,
    S: SessionStore,
    H: PasswordScheme,
    K: Clock + Send + Sync,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(
        credentials: Arc<C>,
        sessions: Arc<S>,
        passwords: Arc<H>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            credentials,
            sessions,
            passwords,
            clock,
        }
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Validation`] when the username or
    /// password is empty and [`SessionServiceError::DuplicateUsername`]
    /// when the name is already taken.
    pub async fn sign_up(&self, username: &str, password: &str) -> SessionServiceResult<UserId> {
        if password.is_empty() {
            return Err(AuthDomainError::EmptyPassword.into());
        }
        let password_hash = self.passwords.hash(password)?;
        let user = User::new(username, password_hash)?;
        self.credentials.create_user(&user).await?;
        info!(user_id = %user.id(), "user registered");
        Ok(user.id())
    }

    /// Authenticates a user and mints a fresh session token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::InvalidCredentials`] whether the
    /// username is absent or the password verify fails; the two cases are
    /// indistinguishable to the caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> SessionServiceResult<SessionToken> {
        let found = self.credentials.find_by_username(username.trim()).await?;
        let user = match found {
            Some(user) if self.passwords.verify(user.password_hash(), password) => user,
            _ => {
                debug!("login rejected");
                return Err(SessionServiceError::InvalidCredentials);
            }
        };

        let session = Session::issue(user.id(), &*self.clock);
        let token = session.token().clone();
        self.sessions.insert(session).await?;
        info!(user_id = %user.id(), "session issued");
        Ok(token)
    }

    /// Revokes the session for the given token.
    ///
    /// Always succeeds: revoking an already-invalid or absent token is a
    /// no-op, so logout is idempotent and safe to repeat.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Sessions`] only when the session
    /// store itself fails.
    pub async fn revoke(&self, token: &SessionToken) -> SessionServiceResult<()> {
        self.sessions.remove(token).await?;
        debug!("session revoked");
        Ok(())
    }

    async fn resolve_active(&self, token: &SessionToken) -> Result<UserId, ResolveSessionError> {
        let found = self.sessions.find(token).await.map_err(store_failure)?;
        let Some(session) = found else {
            return Err(ResolveSessionError::Unauthorized);
        };
        if session.is_expired(&*self.clock) {
            // Expired sessions are reaped on observation.
            self.sessions.remove(token).await.map_err(store_failure)?;
            return Err(ResolveSessionError::Unauthorized);
        }
        Ok(session.user_id())
    }
}

#[async_trait]
impl<C, S, H, K> SessionResolver for SessionService<C, S, H, K>
where
    C: CredentialStore,
    S: SessionStore,
    H: PasswordScheme,
    K: Clock + Send + Sync,
{
    async fn resolve(&self, token: &SessionToken) -> Result<UserId, ResolveSessionError> {
        self.resolve_active(token).await
    }
}

fn store_failure(err: SessionStoreError) -> ResolveSessionError {
    match err {
        SessionStoreError::Persistence(inner) => ResolveSessionError::Store(inner),
    }
}
