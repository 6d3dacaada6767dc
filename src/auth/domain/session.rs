//! Session capability bound to a user reference.

use super::{SessionToken, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// How long an issued session remains valid.
const SESSION_TTL_HOURS: i64 = 24;

/// An active session: the server-side record a bearer token resolves to.
///
/// A session is a capability, not a profile. It carries nothing beyond the
/// user reference and its validity window, and it exists only between a
/// successful login and the matching logout (or expiry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: SessionToken,
    user_id: UserId,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Issues a fresh session for the given user.
    #[must_use]
    pub fn issue(user_id: UserId, clock: &impl Clock) -> Self {
        let issued_at = clock.utc();
        Self {
            token: SessionToken::generate(),
            user_id,
            issued_at,
            expires_at: issued_at + TimeDelta::hours(SESSION_TTL_HOURS),
        }
    }

    /// Returns the bearer token identifying this session.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the user this session is bound to.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the issuance timestamp.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns whether the session has outlived its validity window.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        clock.utc() >= self.expires_at
    }
}
