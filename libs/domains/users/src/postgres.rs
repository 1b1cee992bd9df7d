use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

/// Postgres-backed UserRepository
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<()> {
        let id = user.id;
        let active_model: entity::ActiveModel = user.into();

        // A duplicate email trips the unique index and surfaces as Storage
        active_model
            .insert(&self.db)
            .await
            .map_err(|e| UserError::Storage(format!("Database error: {}", e)))?;

        tracing::info!(user_id = %id, "Created user");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UserError::Storage(format!("Database error: {}", e)))?
            .map(Into::into)
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
