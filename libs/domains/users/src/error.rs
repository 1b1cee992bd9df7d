use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Never leak whether the email exists or the password was wrong
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            UserError::NotFound(email) => {
                (StatusCode::NOT_FOUND, format!("User {} not found", email))
            }
            UserError::Storage(msg) | UserError::PasswordHash(msg) | UserError::Token(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
