//! Password scheme port: a black-box one-way function with verify.

use thiserror::Error;

/// One-way password hashing contract.
///
/// The core never inspects hash contents; it stores the string produced by
/// [`PasswordScheme::hash`] and feeds it back to
/// [`PasswordScheme::verify`].
pub trait PasswordScheme: Send + Sync {
    /// Hashes a plaintext password with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordSchemeError`] when the underlying primitive fails.
    fn hash(&self, plain: &str) -> Result<String, PasswordSchemeError>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// A malformed stored hash verifies as `false`, never as an error, so
    /// callers cannot distinguish it from a wrong password.
    fn verify(&self, hash: &str, plain: &str) -> bool;
}

/// Error returned when the hashing primitive fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordSchemeError(pub String);
