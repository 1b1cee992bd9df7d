//! JWT configuration.
//!
//! Follows the same `FromEnv` pattern as `ServerConfig` and `PostgresConfig`.

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters
/// - `JWT_EXPIRES_IN` (optional) - Token lifetime in seconds, defaults to 300
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret and expiry window.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>, expires_in: i64) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self { secret, expires_in }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expires_in = env_or_default("JWT_EXPIRES_IN", "300").parse().map_err(|e| {
            ConfigError::ParseError {
                key: "JWT_EXPIRES_IN".to_string(),
                details: format!("{}", e),
            }
        })?;

        Ok(Self { secret, expires_in })
    }
}
