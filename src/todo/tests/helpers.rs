//! Shared test helpers for todo tests.

use crate::auth::{
    domain::{SessionToken, UserId},
    ports::{ResolveSessionError, SessionResolver},
};
use async_trait::async_trait;

mockall::mock! {
    /// Mock session resolver for exercising the todo service gate.
    pub Resolver {}

    #[async_trait]
    impl SessionResolver for Resolver {
        async fn resolve(&self, token: &SessionToken) -> Result<UserId, ResolveSessionError>;
    }
}

/// Builds a resolver that maps each listed token to its user and rejects
/// everything else as unauthorized.
pub fn resolver_for(entries: Vec<(SessionToken, UserId)>) -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver.expect_resolve().returning(move |token| {
        entries
            .iter()
            .find(|(known, _)| known == token)
            .map(|(_, user)| *user)
            .ok_or(ResolveSessionError::Unauthorized)
    });
    resolver
}
