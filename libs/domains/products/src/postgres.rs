use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, Order,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, SortOrder},
    repository::ProductRepository,
};

/// Postgres-backed ProductRepository
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> ProductResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ProductError::Storage(format!("Database error: {}", e)))?
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: Product) -> ProductResult<()> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        active_model
            .insert(&self.db)
            .await
            .map_err(|e| ProductError::Storage(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %id, "Created product");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        Ok(self.fetch(id).await?.into())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let id = product.id;

        // Existence probe, so a vanished row surfaces as NotFound instead
        // of an upsert
        let model = self.fetch(id).await?;

        let mut active_model = model.into_active_model();
        active_model.name = Set(product.name);
        active_model.price = Set(product.price);

        active_model
            .update(&self.db)
            .await
            .map_err(|e| ProductError::Storage(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let model = self.fetch(id).await?;

        model
            .delete(&self.db)
            .await
            .map_err(|e| ProductError::Storage(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn find_all(
        &self,
        page: u64,
        limit: u64,
        sort: SortOrder,
    ) -> ProductResult<Vec<Product>> {
        let order = match sort {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut query = entity::Entity::find().order_by(entity::Column::CreatedAt, order);

        if page != 0 && limit != 0 {
            // An offset past u64::MAX can only point past the end
            let Some(offset) = page.saturating_sub(1).checked_mul(limit) else {
                return Ok(Vec::new());
            };
            query = query.limit(limit).offset(offset);
        }

        let models = query
            .all(&self.db)
            .await
            .map_err(|e| ProductError::Storage(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
