//! Users Domain
//!
//! Registration and credential-based token issuance.
//!
//! # Features
//!
//! - User registration with Argon2 password hashing
//! - Login: credentials exchanged for a signed JWT access token
//!
//! The layering mirrors the products domain: handlers → service →
//! repository → models, with the repository trait abstracting over the
//! Postgres and in-memory backends.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, TokenRequest, TokenResponse, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
