use std::sync::Arc;

use axum::{extract::State, Json};
use geojson::FeatureCollection;

use crate::state::AppState;

pub async fn get_boundaries(State(state): State<Arc<AppState>>) -> Json<FeatureCollection> {
    Json(FeatureCollection::clone(&state.boundaries))
}
