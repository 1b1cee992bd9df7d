use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{UuidPath, ValidatedJson};
use std::sync::Arc;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Create the products router with all HTTP endpoints.
///
/// Authentication is applied by the caller at wiring time; these routes
/// assume the bearer token has already been verified.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create a new product
///
/// POST /products
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    service.create_product(input).await?;
    Ok(StatusCode::CREATED)
}

/// List products with pagination and sort
///
/// GET /products?page=1&limit=10&sort=asc
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service
        .list_products(query.page(), query.limit(), query.sort_order())
        .await?;
    Ok(Json(products))
}

/// Get a product by ID
///
/// GET /products/:id
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product
///
/// PUT /products/:id
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<impl IntoResponse> {
    service.update_product(id, input).await?;
    Ok(StatusCode::OK)
}

/// Delete a product
///
/// DELETE /products/:id
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::OK)
}
