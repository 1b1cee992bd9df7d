use std::sync::Arc;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, SortOrder, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Construct a validated product and persist it.
    ///
    /// Validation failures never reach the repository.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<()> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(product).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository.find_by_id(id).await
    }

    /// List products ordered by creation time
    pub async fn list_products(
        &self,
        page: u64,
        limit: u64,
        sort: SortOrder,
    ) -> ProductResult<Vec<Product>> {
        self.repository.find_all(page, limit, sort).await
    }

    /// Update a product.
    ///
    /// The path id always wins over a body-supplied id, and the repository
    /// probes for existence before writing.
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<()> {
        let mut product = Product::new(input.name, input.price)?;
        product.id = id;
        self.repository.update(product).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}
