//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// A body that fails to decode or fails validation is rejected with a
/// 400 response carrying a `{message}` body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;

        Ok(ValidatedJson(data))
    }
}
