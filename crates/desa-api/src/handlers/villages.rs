use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::{MacroResponse, MicroResponse};
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;

pub async fn get_macro(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MacroResponse>, ApiError> {
    let response = ProfileService::macro_view(&state).await?;
    Ok(Json(MacroResponse::clone(&response)))
}

pub async fn get_micro(
    State(state): State<Arc<AppState>>,
    Path(village_id): Path<String>,
) -> Result<Json<MicroResponse>, ApiError> {
    tracing::info!(village_id = %village_id, "Loading village profile");
    let response = ProfileService::micro_view(&state, &village_id).await?;
    Ok(Json(response))
}
