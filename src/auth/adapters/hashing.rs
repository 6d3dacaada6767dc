//! Scrypt-backed implementation of the password scheme port.

use crate::auth::ports::{PasswordScheme, PasswordSchemeError};
use scrypt::Scrypt;
use scrypt::password_hash::rand_core::OsRng;
use scrypt::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Password scheme hashing with scrypt and a per-password random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScryptPasswordScheme;

impl ScryptPasswordScheme {
    /// Creates the scheme with scrypt's default parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordScheme for ScryptPasswordScheme {
    fn hash(&self, plain: &str) -> Result<String, PasswordSchemeError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Scrypt
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| PasswordSchemeError(err.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, hash: &str, plain: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Scrypt.verify_password(plain.as_bytes(), &parsed).is_ok()
    }
}
