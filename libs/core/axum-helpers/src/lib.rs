//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT encoding/verification and bearer-token middleware
//! - **[`errors`]**: Structured `{message}` error responses
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//! - **[`server`]**: Server setup with graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{Claims, JwtAuth, JwtConfig, jwt_auth_middleware};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};

// Re-export server helpers
pub use server::{create_app, shutdown_signal};
