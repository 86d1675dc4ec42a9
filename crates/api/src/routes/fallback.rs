//! Catch-all for unmatched requests.

use axum::http::{Method, Uri};
use cloudinfo_shared::AppError;
use tracing::debug;

use crate::ApiError;

/// Responds 404 `{"error":"Not Found"}` for any unmatched method or path.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string()).into()
}
