use chrono::{DateTime, Utc};
use desa_core::models::{
    Criminal, Digital, Disaster, Disease, Economy, EducationFunnel, HealthRadar, Infrastructure,
    Sanitation, Security, Social, Village, VillageAnalytics, VillageStats,
};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub boundaries: usize,
    pub boundaries_loaded_at: DateTime<Utc>,
    pub villages: usize,
}

impl HealthResponse {
    pub fn ok(boundaries: usize, boundaries_loaded_at: DateTime<Utc>, villages: usize) -> Self {
        Self {
            status: "ok",
            service: "desa-api",
            boundaries,
            boundaries_loaded_at,
            villages,
        }
    }
}

/// One village in the regional overview
#[derive(Debug, Clone, Serialize)]
pub struct VillageMacro {
    pub id: String,
    pub name: String,
    pub district: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub health_radar: HealthRadar,
    pub education_funnel: EducationFunnel,
    pub economy: Option<Economy>,
    pub infrastructure: Option<Infrastructure>,
    pub digital: Option<Digital>,
    pub disaster: Option<Disaster>,
    pub disease: Option<Disease>,
    pub criminal: Option<Criminal>,
    pub social: Option<Social>,
    pub security: Option<Security>,
    pub sanitation: Option<Sanitation>,
}

impl VillageMacro {
    pub fn new(
        village: &Village,
        health_radar: HealthRadar,
        education_funnel: EducationFunnel,
    ) -> Self {
        let stats = &village.stats;
        Self {
            id: village.id.clone(),
            name: village.name.clone(),
            district: village.district.clone(),
            latitude: village.latitude,
            longitude: village.longitude,
            health_radar,
            education_funnel,
            economy: stats.economy.clone(),
            infrastructure: stats.infrastructure.clone(),
            digital: stats.digital.clone(),
            disaster: stats.disaster.clone(),
            disease: stats.disease.clone(),
            criminal: stats.criminal.clone(),
            social: stats.social.clone(),
            security: stats.security.clone(),
            sanitation: stats.sanitation.clone(),
        }
    }
}

/// Regional overview response
#[derive(Debug, Clone, Serialize)]
pub struct MacroResponse {
    pub data: Vec<VillageMacro>,
}

/// Headline numbers shown on a village card
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub doctors: u32,
    pub schools: u32,
    pub markets: u32,
    pub signal: String,
}

impl SummaryStats {
    pub fn from_stats(stats: &VillageStats) -> Self {
        Self {
            doctors: stats.health.as_ref().map_or(0, |h| h.doctors),
            schools: stats.education.as_ref().map_or(0, |e| e.elementary()),
            markets: stats.economy.as_ref().map_or(0, |e| e.markets),
            signal: stats
                .digital
                .as_ref()
                .and_then(|d| d.signal_strength.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Full profile of one village
#[derive(Debug, Clone, Serialize)]
pub struct VillageMicro {
    pub id: String,
    pub name: String,
    pub district: String,
    pub status: Option<String>,
    pub topography: Option<String>,
    pub forest_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub stats: SummaryStats,
    pub analytics: VillageAnalytics,
    #[serde(flatten)]
    pub groups: VillageStats,
}

impl VillageMicro {
    pub fn new(village: Village, analytics: VillageAnalytics) -> Self {
        Self {
            stats: SummaryStats::from_stats(&village.stats),
            analytics,
            id: village.id,
            name: village.name,
            district: village.district,
            status: village.status,
            topography: village.topography,
            forest_location: village.forest_location,
            latitude: village.latitude,
            longitude: village.longitude,
            groups: village.stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MicroResponse {
    pub data: VillageMicro,
}
