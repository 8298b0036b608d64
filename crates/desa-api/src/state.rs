use desa_core::geo::{GeometryStore, ResolverOptions, SpatialResolver};
use desa_store::ports::VillageStore;
use geojson::FeatureCollection;
use std::sync::Arc;
use std::time::Duration;

use crate::services::MacroCache;

/// Shared, read-mostly request state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: SpatialResolver,
    pub village_store: Arc<dyn VillageStore>,
    /// Loaded boundaries, serialized once for `/api/boundaries`
    pub boundaries: Arc<FeatureCollection>,
    pub macro_cache: Arc<MacroCache>,
}

impl AppState {
    pub fn new(
        geometry_store: Arc<GeometryStore>,
        resolver_options: ResolverOptions,
        village_store: Arc<dyn VillageStore>,
        macro_cache_ttl: Duration,
    ) -> Self {
        let boundaries = Arc::new(geometry_store.to_feature_collection());
        Self {
            resolver: SpatialResolver::with_options(geometry_store, resolver_options),
            village_store,
            boundaries,
            macro_cache: Arc::new(MacroCache::new(macro_cache_ttl)),
        }
    }
}
