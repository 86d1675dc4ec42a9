//! Mapping of application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cloudinfo_shared::AppError;
use serde_json::json;
use tracing::error;

/// Error returned from handlers.
///
/// The body is `{"error": <reason phrase>}` so internal detail such as the
/// requested path never reaches the client.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, Json(json!({ "error": reason }))).into_response()
    }
}
