pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{Claims, JwtAuth};
pub use middleware::jwt_auth_middleware;
