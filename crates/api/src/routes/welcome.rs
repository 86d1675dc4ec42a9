//! Welcome message route.

use axum::{Json, Router, extract::State, routing::get};
use cloudinfo_core::report::Welcome;

use crate::AppState;

/// GET `/` - Greeting naming the configured cloud provider.
async fn welcome(State(state): State<AppState>) -> Json<Welcome> {
    Json(Welcome::now(state.cloud(), &state.process))
}

/// Creates the welcome route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
