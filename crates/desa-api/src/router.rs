use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Spatial resolution
        .route("/api/nearest-village", get(handlers::nearest_village))
        .route("/api/boundaries", get(handlers::get_boundaries))

        // Village profiles
        .route("/api/macro", get(handlers::get_macro))
        .route("/api/micro/{village_id}", get(handlers::get_micro))

        .with_state(state)
}
