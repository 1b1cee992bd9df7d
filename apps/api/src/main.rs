//! Storefront API - REST server for products and users
//!
//! Wires the Postgres-backed domain services behind an Axum router:
//! `/users` is public (registration and token issuance), `/products`
//! requires a bearer token issued by `/users/generate-token`.

use axum::{Router, middleware};
use axum_helpers::{JwtAuth, create_app, jwt_auth_middleware};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{PgProductRepository, ProductService};
use domain_users::{PgUserRepository, UserService};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = database::postgres::connect_from_config(config.postgres.clone()).await?;

    let jwt_auth = JwtAuth::new(&config.jwt);

    let products_router = {
        let repository = PgProductRepository::new(db.clone());
        domain_products::handlers::router(ProductService::new(repository)).layer(
            middleware::from_fn_with_state(jwt_auth.clone(), jwt_auth_middleware),
        )
    };

    let users_router = {
        let repository = PgUserRepository::new(db.clone());
        domain_users::handlers::router(UserService::new(repository, jwt_auth.clone()))
    };

    let app = Router::new()
        .nest("/products", products_router)
        .nest("/users", users_router)
        .layer(TraceLayer::new_for_http());

    info!("Starting Storefront API on port {}", config.server.port);
    create_app(app, &config.server).await?;

    info!("Storefront API shutdown complete");
    Ok(())
}
