use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Extract a bearer token from the Authorization header.
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// JWT authentication middleware.
///
/// Validates the bearer token against the process-wide signing secret.
/// Rejects missing, malformed, or expired tokens with 401 and inserts
/// the decoded [`super::Claims`] into request extensions on success.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::{JwtAuth, jwt_auth_middleware};
///
/// let protected_routes = Router::new()
///     .route("/api/protected", get(protected_handler))
///     .layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match extract_token_from_request(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(AppError::Unauthorized("No token provided".to_string()));
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("JWT verification failed: {}", e);
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
