use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// Fails with `Storage` when the email is already taken; the users
    /// table carries a unique constraint on the email column.
    async fn create(&self, user: User) -> UserResult<()>;

    /// Fetch a user by email, failing with `NotFound` when absent
    async fn find_by_email(&self, email: &str) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;

        // Mirrors the unique index on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::Storage(format!(
                "duplicate email: {}",
                user.email
            )));
        }

        tracing::info!(user_id = %user.id, "Created user");
        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
