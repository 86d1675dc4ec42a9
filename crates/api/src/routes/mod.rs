//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod fallback;
pub mod health;
pub mod info;
pub mod welcome;

/// Creates the router with every informational route.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(welcome::routes())
        .merge(health::routes())
        .merge(info::routes())
}
