use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, TokenRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with registration and token issuance.
///
/// These routes are public; bearer authentication protects the other
/// domains, not this one.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user))
        .route("/generate-token", post(generate_token))
        .with_state(shared_service)
}

/// Register a new user
///
/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    service.register(input).await?;
    Ok(StatusCode::CREATED)
}

/// Exchange credentials for an access token
///
/// POST /users/generate-token
async fn generate_token<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<TokenRequest>,
) -> UserResult<Json<TokenResponse>> {
    let access_token = service.authenticate(&input.email, &input.password).await?;
    Ok(Json(TokenResponse { access_token }))
}
