//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use cloudinfo_core::report::HealthReport;

use crate::AppState;

/// Health check handler.
///
/// Reports liveness of the process only; it never checks dependencies.
async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::now(state.cloud(), &state.process))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
