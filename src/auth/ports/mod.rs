//! Port contracts for credential and session handling.
//!
//! Ports define infrastructure-agnostic interfaces used by auth services.

pub mod credential_store;
pub mod password;
pub mod resolver;
pub mod session_store;

pub use credential_store::{CredentialStore, CredentialStoreError, CredentialStoreResult};
pub use password::{PasswordScheme, PasswordSchemeError};
pub use resolver::{ResolveSessionError, SessionResolver};
pub use session_store::{SessionStore, SessionStoreError, SessionStoreResult};
