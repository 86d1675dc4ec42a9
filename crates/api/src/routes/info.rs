//! Application info route.

use axum::{Json, Router, extract::State, routing::get};
use cloudinfo_core::report::AppInfo;

use crate::AppState;

/// GET `/api/info` - Static application name and version.
async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(AppInfo::new(state.cloud()))
}

/// Creates the application info route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/info", get(app_info))
}
