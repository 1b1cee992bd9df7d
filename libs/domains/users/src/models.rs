use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::UserResult;
use crate::password;

/// User entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// User display name
    pub name: String,
    /// User email (lookup key; uniqueness enforced by the storage layer)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user, hashing the raw password.
    ///
    /// The raw password is never stored; a hashing failure is an internal
    /// error propagated unchanged.
    pub fn new(name: String, email: String, password: &str) -> UserResult<Self> {
        let password_hash = password::hash(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
        })
    }

    /// Check a raw password against the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        password::verify(&self.password_hash, password)
    }
}

/// DTO for creating a new user
///
/// Required-field validation is struct-level; all three fields must be
/// non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// DTO for exchanging credentials for an access token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response carrying a freshly issued access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
