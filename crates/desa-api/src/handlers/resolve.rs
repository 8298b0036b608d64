use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use desa_core::models::{Coordinate, ResolutionResult};

use crate::dto::NearestVillageQuery;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn nearest_village(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NearestVillageQuery>, QueryRejection>,
) -> Result<Json<ResolutionResult>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::bad_request("Expected numeric 'lat' and 'long' query parameters")
            .with_details(rejection.body_text())
    })?;

    let coord = Coordinate::new(query.lat, query.long)?;
    tracing::info!(lat = coord.lat, lon = coord.lon, "Resolving nearest village");

    // Centroids are only needed once both boundary tiers miss
    if let Some(result) = state.resolver.match_boundary(coord) {
        return Ok(Json(result));
    }

    let centroids = state.village_store.centroids().await?;
    let result = state.resolver.resolve_by_centroid(coord, &centroids)?;
    Ok(Json(result))
}
