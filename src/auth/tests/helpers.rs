//! Shared test helpers for auth tests.

use crate::auth::ports::{PasswordScheme, PasswordSchemeError};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::RwLock;

/// Reversible stand-in for the one-way password scheme.
///
/// Keeps service tests fast and deterministic; the real scrypt adapter is
/// covered separately in `hashing_tests`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakePasswordScheme;

impl PasswordScheme for FakePasswordScheme {
    fn hash(&self, plain: &str) -> Result<String, PasswordSchemeError> {
        Ok(format!("fake${plain}"))
    }

    fn verify(&self, hash: &str, plain: &str) -> bool {
        hash == format!("fake${plain}")
    }
}

/// Clock that reports a controlled instant and can be advanced manually.
#[derive(Debug)]
pub struct SteppingClock {
    now: RwLock<DateTime<Utc>>,
}

impl SteppingClock {
    /// Creates a clock frozen at the given instant.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the reported instant forward by whole hours.
    pub fn advance_hours(&self, hours: i64) {
        let mut now = self.now.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += TimeDelta::hours(hours);
    }

    fn current(&self) -> DateTime<Utc> {
        *self
            .now
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.current().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.current()
    }
}
