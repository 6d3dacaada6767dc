//! In-memory adapters for credential and session storage.

mod credentials;
mod sessions;

pub use credentials::InMemoryCredentialStore;
pub use sessions::InMemorySessionStore;
