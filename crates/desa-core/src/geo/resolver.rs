//! Coordinate to village resolution.
//!
//! Resolution runs as an ordered cascade where each tier short-circuits:
//!
//! 1. exact containment in a boundary polygon (boundary inclusive)
//! 2. nearest boundary within a small planar threshold
//! 3. nearest recorded village centroid by great-circle distance
//! 4. an explicit failure, or a configured fallback village
//!
//! The resolver never mutates the store; identical inputs give identical results.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{DesaError, Result};
use crate::geo::distance::{degrees_to_km, haversine_km};
use crate::geo::store::GeometryStore;
use crate::models::{
    Coordinate, ResolutionMethod, ResolutionResult, VillageCentroid, VillageGeometry,
};

/// Roughly 500 m at the equator; shrinks east-west with latitude
pub const DEFAULT_FUZZY_THRESHOLD_DEG: f64 = 0.005;

/// Placeholder village returned when nothing else resolves.
/// Only used when explicitly configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackVillage {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Maximum planar distance, in degrees, for a fuzzy boundary match
    pub fuzzy_threshold_deg: f64,
    pub fallback: Option<FallbackVillage>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold_deg: DEFAULT_FUZZY_THRESHOLD_DEG,
            fallback: None,
        }
    }
}

impl ResolverOptions {
    /// Options with a checked fuzzy threshold
    pub fn new(fuzzy_threshold_deg: f64, fallback: Option<FallbackVillage>) -> Result<Self> {
        Ok(Self {
            fuzzy_threshold_deg: check_fuzzy_threshold(fuzzy_threshold_deg)?,
            fallback,
        })
    }
}

/// A fuzzy threshold must be a finite, non-negative number of degrees
pub fn check_fuzzy_threshold(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DesaError::ConfigInvalid {
            key: "fuzzy_threshold_deg".to_string(),
            reason: format!(
                "Threshold must be a non-negative number of degrees, got {}",
                value
            ),
        })
    }
}

/// Resolves coordinates against a shared boundary store
#[derive(Debug, Clone)]
pub struct SpatialResolver {
    store: Arc<GeometryStore>,
    options: ResolverOptions,
}

impl SpatialResolver {
    pub fn new(store: Arc<GeometryStore>) -> Self {
        Self::with_options(store, ResolverOptions::default())
    }

    pub fn with_options(store: Arc<GeometryStore>, options: ResolverOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    /// Run the full cascade
    pub fn resolve(
        &self,
        coord: Coordinate,
        centroids: &[VillageCentroid],
    ) -> Result<ResolutionResult> {
        match self.match_boundary(coord) {
            Some(result) => Ok(result),
            None => self.resolve_by_centroid(coord, centroids),
        }
    }

    /// Boundary tiers only: exact containment, then fuzzy proximity
    pub fn match_boundary(&self, coord: Coordinate) -> Option<ResolutionResult> {
        if let Some(village) = self.find_containing(coord) {
            tracing::debug!(village_id = %village.id, "Boundary containment hit");
            return Some(ResolutionResult::new(
                village.id.clone(),
                village.name.clone(),
                0.0,
                ResolutionMethod::Exact,
            ));
        }

        let (village, degrees) = self.find_nearest_boundary(coord)?;
        // Written so that a NaN threshold never matches
        if !(degrees <= self.options.fuzzy_threshold_deg) {
            tracing::debug!(
                nearest_deg = degrees,
                threshold_deg = self.options.fuzzy_threshold_deg,
                "No boundary within fuzzy threshold"
            );
            return None;
        }

        tracing::debug!(village_id = %village.id, distance_deg = degrees, "Fuzzy boundary hit");
        Some(ResolutionResult::new(
            village.id.clone(),
            village.name.clone(),
            degrees_to_km(degrees),
            ResolutionMethod::Fuzzy,
        ))
    }

    /// Centroid tier, then the terminal fallback
    pub fn resolve_by_centroid(
        &self,
        coord: Coordinate,
        centroids: &[VillageCentroid],
    ) -> Result<ResolutionResult> {
        if let Some((centroid, km)) = nearest_centroid(coord, centroids) {
            tracing::debug!(village_id = %centroid.id, distance_km = km, "Centroid fallback hit");
            return Ok(ResolutionResult::new(
                centroid.id.clone(),
                centroid.name.clone(),
                km,
                ResolutionMethod::CentroidFallback,
            ));
        }

        match &self.options.fallback {
            Some(fallback) => {
                tracing::warn!(
                    lat = coord.lat,
                    lon = coord.lon,
                    village_id = %fallback.id,
                    "No village resolved, returning configured fallback"
                );
                Ok(ResolutionResult::new(
                    fallback.id.clone(),
                    fallback.name.clone(),
                    0.0,
                    ResolutionMethod::ErrorFallback,
                ))
            }
            None => Err(DesaError::UnresolvedCoordinate {
                lat: coord.lat,
                lon: coord.lon,
            }),
        }
    }

    /// First boundary, in store order, containing the coordinate.
    /// Overlapping boundaries resolve to whichever was loaded first.
    pub fn find_containing(&self, coord: Coordinate) -> Option<&VillageGeometry> {
        let point = coord.to_point();
        self.store
            .iter()
            .find(|village| village.geometry.contains_point(&point))
    }

    /// Boundary with the smallest planar distance, in degrees.
    /// Ties keep the earlier boundary.
    pub fn find_nearest_boundary(&self, coord: Coordinate) -> Option<(&VillageGeometry, f64)> {
        let point = coord.to_point();
        let mut nearest: Option<(&VillageGeometry, f64)> = None;

        for village in self.store.iter() {
            let distance = village.geometry.planar_distance(&point);
            if !distance.is_finite() {
                continue;
            }
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((village, distance));
            }
        }

        nearest
    }
}

/// Centroid with the smallest great-circle distance in kilometers.
/// Centroids with non-finite coordinates are ignored; ties keep the earlier one.
pub fn nearest_centroid(
    coord: Coordinate,
    centroids: &[VillageCentroid],
) -> Option<(&VillageCentroid, f64)> {
    let mut nearest: Option<(&VillageCentroid, f64)> = None;

    for centroid in centroids {
        if !centroid.lat.is_finite() || !centroid.lon.is_finite() {
            continue;
        }
        let target = Coordinate {
            lat: centroid.lat,
            lon: centroid.lon,
        };
        let km = haversine_km(coord, target);
        if nearest.map_or(true, |(_, best)| km < best) {
            nearest = Some((centroid, km));
        }
    }

    nearest
}
