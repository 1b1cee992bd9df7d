use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,

    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProductError::NameRequired | ProductError::PriceRequired | ProductError::InvalidPrice => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ProductError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Product {} not found", id))
            }
            ProductError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
