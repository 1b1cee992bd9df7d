use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

/// Stateless JWT authentication.
///
/// Holds the process-wide signing secret and the configured expiry window.
/// Constructed once at startup and passed explicitly to whoever needs to
/// issue or verify tokens; there is no global state.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    expires_in: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expires_in: config.expires_in,
        }
    }

    /// Create a signed access token for the given subject.
    ///
    /// The expiry claim is `now + expires_in` as a Unix timestamp.
    pub fn encode_token(&self, subject: &str) -> eyre::Result<String> {
        self.encode_with_ttl(subject, self.expires_in)
    }

    fn encode_with_ttl(&self, subject: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify token signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
