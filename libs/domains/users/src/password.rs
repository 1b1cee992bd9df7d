//! Argon2 password hashing helpers.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// Hash a raw password with Argon2 and a fresh random salt.
pub fn hash(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a raw password against a stored hash.
///
/// A malformed stored hash verifies as false rather than erroring; the
/// caller cannot distinguish it from a wrong password.
pub fn verify(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
