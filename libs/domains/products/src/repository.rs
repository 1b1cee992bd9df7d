use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, SortOrder};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: Product) -> ProductResult<()>;

    /// Fetch a product by ID, failing with `NotFound` when absent
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// Overwrite the mutable fields of an existing product.
    ///
    /// Re-fetches by id first and fails with `NotFound` if the target no
    /// longer exists, so the operation is never a blind upsert.
    async fn update(&self, product: Product) -> ProductResult<()>;

    /// Delete a product by ID, failing fast with `NotFound`
    async fn delete(&self, id: Uuid) -> ProductResult<()>;

    /// List products ordered by creation time.
    ///
    /// When either `page` or `limit` is 0 the entire sorted result set is
    /// returned; otherwise a 1-indexed page of `limit` items.
    async fn find_all(&self, page: u64, limit: u64, sort: SortOrder)
    -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        tracing::info!(product_id = %product.id, "Created product");
        products.insert(product.id, product);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        let existing = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        // created_at is immutable; only the mutable fields are overwritten
        existing.name = product.name;
        existing.price = product.price;

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_none() {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn find_all(
        &self,
        page: u64,
        limit: u64,
        sort: SortOrder,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        if sort == SortOrder::Desc {
            result.reverse();
        }

        if page == 0 || limit == 0 {
            return Ok(result);
        }

        // An offset past u64::MAX can only point past the end
        let Some(offset) = page.saturating_sub(1).checked_mul(limit) else {
            return Ok(Vec::new());
        };

        let result = result
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    async fn seed_products(repo: &InMemoryProductRepository, count: usize) {
        // Explicit creation times keep the ordering deterministic
        let base = Utc::now();
        for i in 1..=count {
            let mut product =
                Product::new(format!("Product {}", i), 100.0 + i as f64).unwrap();
            product.created_at = base + Duration::seconds(i as i64);
            repo.create(product).await.unwrap();
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_and_find_product() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Product 1".to_string(), 100.0).unwrap();
        let id = product.id;

        repo.create(product).await.unwrap();

        let fetched = repo.find_by_id(id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Product 1");
    }

    #[tokio::test]
    async fn test_find_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields_only() {
        let repo = InMemoryProductRepository::new();
        let original = Product::new("Product 1".to_string(), 100.0).unwrap();
        let id = original.id;
        let created_at = original.created_at;
        repo.create(original).await.unwrap();

        let mut update = Product::new("Product 1 updated".to_string(), 150.0).unwrap();
        update.id = id;
        repo.update(update).await.unwrap();

        let fetched = repo.find_by_id(id).await.unwrap();
        assert_eq!(fetched.name, "Product 1 updated");
        assert_eq!(fetched.price, 150.0);
        assert_eq!(fetched.created_at, created_at);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Product 1".to_string(), 100.0).unwrap();

        let result = repo.update(product).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_all_paginates_ascending() {
        let repo = InMemoryProductRepository::new();
        seed_products(&repo, 23).await;

        let first = repo.find_all(1, 10, SortOrder::Asc).await.unwrap();
        assert_eq!(
            names(&first),
            (1..=10).map(|i| format!("Product {}", i)).collect::<Vec<_>>()
        );

        let second = repo.find_all(2, 10, SortOrder::Asc).await.unwrap();
        assert_eq!(
            names(&second),
            (11..=20).map(|i| format!("Product {}", i)).collect::<Vec<_>>()
        );

        let third = repo.find_all(3, 10, SortOrder::Asc).await.unwrap();
        assert_eq!(third.len(), 3);
    }

    #[tokio::test]
    async fn test_find_all_paginates_descending() {
        let repo = InMemoryProductRepository::new();
        seed_products(&repo, 23).await;

        let first = repo.find_all(1, 10, SortOrder::Desc).await.unwrap();
        assert_eq!(first[0].name, "Product 23");
        assert_eq!(
            names(&first),
            (14..=23).rev().map(|i| format!("Product {}", i)).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_find_all_with_huge_page_returns_empty() {
        let repo = InMemoryProductRepository::new();
        seed_products(&repo, 3).await;

        let result = repo.find_all(u64::MAX, 2, SortOrder::Asc).await.unwrap();
        assert!(result.is_empty());

        let result = repo.find_all(u64::MAX, u64::MAX, SortOrder::Asc).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_without_pagination_returns_everything() {
        let repo = InMemoryProductRepository::new();
        seed_products(&repo, 23).await;

        let all = repo.find_all(0, 0, SortOrder::Asc).await.unwrap();
        assert_eq!(all.len(), 23);
        assert_eq!(all[0].name, "Product 1");
        assert_eq!(all[22].name, "Product 23");

        // limit without page behaves the same way
        let all = repo.find_all(0, 10, SortOrder::Asc).await.unwrap();
        assert_eq!(all.len(), 23);
    }
}
