use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let villages = state.village_store.count().await?;
    let boundaries = state.resolver.store();
    Ok(Json(HealthResponse::ok(
        boundaries.len(),
        boundaries.loaded_at(),
        villages,
    )))
}
