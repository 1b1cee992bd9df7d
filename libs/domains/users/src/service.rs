use axum_helpers::JwtAuth;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Register a new user, hashing the raw password before storage
    pub async fn register(&self, input: CreateUser) -> UserResult<()> {
        let user = User::new(input.name, input.email, &input.password)?;
        self.repository.create(user).await
    }

    /// Exchange credentials for a signed access token.
    ///
    /// An unknown email and a wrong password collapse into the same
    /// `InvalidCredentials` failure.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<String> {
        let user = self
            .repository
            .find_by_email(email)
            .await
            .map_err(|e| match e {
                UserError::NotFound(_) => UserError::InvalidCredentials,
                other => other,
            })?;

        if !user.verify_password(password) {
            return Err(UserError::InvalidCredentials);
        }

        self.jwt
            .encode_token(&user.id.to_string())
            .map_err(|e| UserError::Token(e.to_string()))
    }
}
