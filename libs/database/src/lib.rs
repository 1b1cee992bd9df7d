//! Database library providing the PostgreSQL connector used by the domain crates.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{PostgresConfig, connect_from_config};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config(config).await?;
//! ```

pub mod postgres;

// Re-exports so app crates don't need a direct sea-orm dependency
pub use sea_orm::{DatabaseConnection, DbErr};
