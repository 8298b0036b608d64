use desa_core::scoring;
use desa_core::DesaError;
use std::sync::Arc;

use crate::dto::{MacroResponse, MicroResponse, VillageMacro, VillageMicro};
use crate::error::ApiError;
use crate::state::AppState;

/// Builds village profiles from stored records
pub struct ProfileService;

impl ProfileService {
    /// Regional overview, served from the cache while it is fresh
    pub async fn macro_view(state: &AppState) -> Result<Arc<MacroResponse>, ApiError> {
        if let Some(cached) = state.macro_cache.get().await {
            tracing::debug!(villages = cached.data.len(), "Macro view cache hit");
            return Ok(cached);
        }

        let villages = state.village_store.list_villages().await?;
        let data = villages
            .iter()
            .map(|village| {
                VillageMacro::new(
                    village,
                    scoring::health_radar(&village.stats),
                    scoring::education_funnel(&village.stats),
                )
            })
            .collect();

        let response = Arc::new(MacroResponse { data });
        state.macro_cache.put(Arc::clone(&response)).await;
        tracing::info!(villages = response.data.len(), "Macro view rebuilt");

        Ok(response)
    }

    /// Full profile of one village with its analytics
    pub async fn micro_view(state: &AppState, village_id: &str) -> Result<MicroResponse, ApiError> {
        let village = state
            .village_store
            .get_village(village_id)
            .await?
            .ok_or_else(|| DesaError::VillageNotFound {
                id: village_id.to_string(),
            })?;

        let analytics = scoring::analyze(&village.stats);
        Ok(MicroResponse {
            data: VillageMicro::new(village, analytics),
        })
    }
}
