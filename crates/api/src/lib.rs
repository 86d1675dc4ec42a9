//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The welcome, health and application info routes
//! - The JSON 404 fallback
//! - The middleware stack wrapped around every route

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use cloudinfo_core::process::ProcessInfo;
use cloudinfo_shared::{AppConfig, CloudProvider};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// Process metadata captured at startup.
    pub process: Arc<ProcessInfo>,
}

impl AppState {
    /// Creates the state from the startup configuration and process metadata.
    #[must_use]
    pub fn new(config: AppConfig, process: ProcessInfo) -> Self {
        Self {
            config: Arc::new(config),
            process: Arc::new(process),
        }
    }

    /// Returns the configured cloud provider label.
    #[must_use]
    pub fn cloud(&self) -> &CloudProvider {
        &self.config.cloud_provider
    }
}

/// Creates the main application router.
///
/// Layers, outermost first: request tracing, security headers, CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(
            middleware::security_headers::security_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
