//! Handler tests for the Products domain
//!
//! These tests exercise the HTTP layer against the in-memory repository:
//! request deserialization, status codes, and response bodies. Bearer
//! authentication is wired in the app crate and is out of scope here.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}

fn app_with_repo(repository: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repository))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_empty_body() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "Product 1", "price": 100.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_create_product_with_empty_name_returns_400() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "", "price": 100.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn test_create_product_with_zero_price_returns_400() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "Product 1", "price": 0.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "price is required");
}

#[tokio::test]
async fn test_create_product_with_missing_price_returns_400() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "Product 1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_product_with_malformed_body_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_get_product_round_trip() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());
    service
        .create_product(CreateProduct {
            name: "Product 1".to_string(),
            price: 100.0,
        })
        .await
        .unwrap();
    let created = service.list_products(0, 0, SortOrder::Asc).await.unwrap();
    let id = created[0].id;

    let app = app_with_repo(repository);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, id);
    assert_eq!(product.name, "Product 1");
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_get_product_with_malformed_id_returns_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "renamed", "price": 10.0 }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_product_returns_200_and_overrides_body_id() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());
    service
        .create_product(CreateProduct {
            name: "Product 1".to_string(),
            price: 100.0,
        })
        .await
        .unwrap();
    let id = service.list_products(0, 0, SortOrder::Asc).await.unwrap()[0].id;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            // Body id differs from the path id; the path wins
            json!({ "id": uuid::Uuid::new_v4(), "name": "renamed", "price": 10.0 }).to_string(),
        ))
        .unwrap();

    let response = app_with_repo(repository).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response.into_body()).await.is_empty());

    let updated = service.get_product(id).await.unwrap();
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.price, 10.0);
}

#[tokio::test]
async fn test_delete_product_returns_200_then_404() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());
    service
        .create_product(CreateProduct {
            name: "Product 1".to_string(),
            price: 100.0,
        })
        .await
        .unwrap();
    let id = service.list_products(0, 0, SortOrder::Asc).await.unwrap()[0].id;

    let delete = |repository: InMemoryProductRepository| {
        app_with_repo(repository).oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
    };

    let response = delete(repository.clone()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(repository).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_with_non_numeric_pagination_returns_everything() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());
    for i in 1..=3 {
        service
            .create_product(CreateProduct {
                name: format!("Product {}", i),
                price: 10.0 * i as f64,
            })
            .await
            .unwrap();
    }

    let response = app_with_repo(repository)
        .oneshot(
            Request::builder()
                .uri("/?page=abc&limit=&sort=sideways")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_products_with_huge_page_returns_empty_list() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());
    service
        .create_product(CreateProduct {
            name: "Product 1".to_string(),
            price: 100.0,
        })
        .await
        .unwrap();

    let response = app_with_repo(repository)
        .oneshot(
            Request::builder()
                .uri(format!("/?page={}&limit=2", u64::MAX))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}
