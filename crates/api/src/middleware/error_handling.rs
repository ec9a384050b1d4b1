//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kitchenhub_core::errors::KitchenError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a `KitchenError` and implements `IntoResponse`, producing
/// a `{"error": "..."}` body with the matching status code.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use kitchenhub_api::middleware::error_handling::AppError;
/// use kitchenhub_core::errors::KitchenError;
///
/// async fn handler(id: String) -> Result<Json<String>, AppError> {
///     if id.is_empty() {
///         return Err(AppError(KitchenError::NotFound("Kitchen not found".to_string())));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub KitchenError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            KitchenError::NotFound(_) => StatusCode::NOT_FOUND,
            KitchenError::Validation(_) => StatusCode::BAD_REQUEST,
            KitchenError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `KitchenResult` inside handlers returning `Result<T, AppError>`.
impl From<KitchenError> for AppError {
    fn from(err: KitchenError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as storage errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(KitchenError::Storage(err))
    }
}
