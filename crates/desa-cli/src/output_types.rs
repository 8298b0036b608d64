//! JSON output structures for CLI commands

use desa_core::models::{Village, VillageAnalytics};
use serde::Serialize;
use std::collections::BTreeMap;

/// Output for `score`
#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub id: String,
    pub name: String,
    pub district: String,
    pub analytics: VillageAnalytics,
}

impl ScoreOutput {
    pub fn new(village: &Village, analytics: VillageAnalytics) -> Self {
        Self {
            id: village.id.clone(),
            name: village.name.clone(),
            district: village.district.clone(),
            analytics,
        }
    }
}

/// Output for `inspect boundaries`
#[derive(Debug, Serialize)]
pub struct InspectBoundariesOutput {
    pub path: String,
    pub loaded: usize,
    /// RFC 3339 time the boundaries were loaded
    pub loaded_at: String,
    pub skipped: Vec<SkippedFeatureInfo>,
}

#[derive(Debug, Serialize)]
pub struct SkippedFeatureInfo {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Output for `inspect villages`
#[derive(Debug, Serialize)]
pub struct InspectVillagesOutput {
    pub path: String,
    pub count: usize,
    pub villages: Vec<VillageSummary>,
}

#[derive(Debug, Serialize)]
pub struct VillageSummary {
    pub id: String,
    pub name: String,
    pub district: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Output for `inspect config`
#[derive(Debug, Serialize)]
pub struct InspectConfigOutput {
    pub values: BTreeMap<String, ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
