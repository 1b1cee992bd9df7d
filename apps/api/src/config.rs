//! Configuration for the Storefront API

use axum_helpers::JwtConfig;
use core_config::{FromEnv, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub jwt: JwtConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let postgres = PostgresConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            server,
            postgres,
            jwt,
            environment,
        })
    }
}
