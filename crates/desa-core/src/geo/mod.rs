//! Geo module for village boundary lookups
//!
//! This module provides the boundary store, distance helpers, and the
//! coordinate-to-village resolution cascade.

pub mod distance;
pub mod resolver;
pub mod store;

// Re-export key types for convenience
pub use distance::{degrees_to_km, haversine_km, EARTH_RADIUS_KM, METERS_PER_DEGREE};
pub use resolver::{
    nearest_centroid, FallbackVillage, ResolverOptions, SpatialResolver,
    DEFAULT_FUZZY_THRESHOLD_DEG,
};
pub use store::{GeometryStore, LoadReport, SkippedFeature};
