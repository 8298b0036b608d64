//! Village records and their statistical snapshot.
//!
//! Field names are English; the original village-census keys are accepted as
//! serde aliases so raw exports deserialize without a mapping step.

use serde::{Deserialize, Serialize};

use crate::models::geometry::VillageCentroid;

/// Sum of counts, saturating at `u32::MAX` instead of overflowing
fn saturating_sum(counts: &[u32]) -> u32 {
    counts.iter().fold(0, |total, &count| total.saturating_add(count))
}

/// Health facilities and personnel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    #[serde(alias = "jumlah_rumah_sakit")]
    pub hospitals: u32,
    #[serde(alias = "jumlah_puskesmas")]
    pub primary_clinics: u32,
    #[serde(alias = "jumlah_klinik")]
    pub clinics: u32,
    #[serde(alias = "jumlah_faskes_masyarakat")]
    pub community_health_posts: u32,
    #[serde(alias = "jumlah_farmasi")]
    pub pharmacies: u32,
    #[serde(alias = "jumlah_dokter")]
    pub doctors: u32,
    #[serde(alias = "jumlah_bidan")]
    pub midwives: u32,
    #[serde(alias = "jumlah_tenaga_kesehatan_lain")]
    pub other_health_workers: u32,
}

/// Infectious disease cases and deaths over the survey year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disease {
    #[serde(alias = "muntaber_cases")]
    pub diarrhea_cases: u32,
    #[serde(alias = "muntaber_deaths")]
    pub diarrhea_deaths: u32,
    #[serde(alias = "dbd_cases")]
    pub dengue_cases: u32,
    #[serde(alias = "dbd_deaths")]
    pub dengue_deaths: u32,
    #[serde(alias = "campak_cases")]
    pub measles_cases: u32,
    #[serde(alias = "campak_deaths")]
    pub measles_deaths: u32,
    pub malaria_cases: u32,
    pub malaria_deaths: u32,
    pub sars_cases: u32,
    pub sars_deaths: u32,
    pub hepatitis_e_cases: u32,
    pub hepatitis_e_deaths: u32,
    #[serde(alias = "difteri_cases")]
    pub diphtheria_cases: u32,
    #[serde(alias = "difteri_deaths")]
    pub diphtheria_deaths: u32,
    pub covid_cases: u32,
    pub covid_deaths: u32,
    /// Pre-aggregated case count carried by some exports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infectious_cases: Option<u32>,
    pub most_cases_disease: Option<String>,
    pub most_deaths_disease: Option<String>,
    pub disability_population: u32,
}

impl Disease {
    /// Total infectious cases: the recorded aggregate if present, otherwise the
    /// sum of the tracked illnesses.
    pub fn total_infectious_cases(&self) -> u32 {
        self.infectious_cases.unwrap_or_else(|| {
            saturating_sum(&[
                self.diarrhea_cases,
                self.dengue_cases,
                self.measles_cases,
                self.malaria_cases,
                self.sars_cases,
                self.hepatitis_e_cases,
                self.diphtheria_cases,
                self.covid_cases,
            ])
        })
    }
}

/// School counts per level, with a public/private breakdown.
///
/// Level totals (`sd_counts`, `smp_counts`, `sma_counts`) are used when present;
/// otherwise they are derived from the ownership breakdown, with Islamic schools
/// (MI, MTs, MA) counted at their equivalent level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub sd_counts: Option<u32>,
    pub smp_counts: Option<u32>,
    pub sma_counts: Option<u32>,
    pub smk_counts: Option<u32>,
    pub universities: Option<u32>,

    #[serde(alias = "sd_negeri")]
    pub sd_public: u32,
    #[serde(alias = "sd_swasta")]
    pub sd_private: u32,
    #[serde(alias = "mi_negeri")]
    pub mi_public: u32,
    #[serde(alias = "mi_swasta")]
    pub mi_private: u32,
    #[serde(alias = "smp_negeri")]
    pub smp_public: u32,
    #[serde(alias = "smp_swasta")]
    pub smp_private: u32,
    #[serde(alias = "mts_negeri")]
    pub mts_public: u32,
    #[serde(alias = "mts_swasta")]
    pub mts_private: u32,
    #[serde(alias = "sma_negeri")]
    pub sma_public: u32,
    #[serde(alias = "sma_swasta")]
    pub sma_private: u32,
    #[serde(alias = "ma_negeri")]
    pub ma_public: u32,
    #[serde(alias = "ma_swasta")]
    pub ma_private: u32,
    #[serde(alias = "smk_negeri")]
    pub smk_public: u32,
    #[serde(alias = "smk_swasta")]
    pub smk_private: u32,
}

impl Education {
    pub fn elementary(&self) -> u32 {
        self.sd_counts.unwrap_or_else(|| {
            saturating_sum(&[
                self.sd_public,
                self.sd_private,
                self.mi_public,
                self.mi_private,
            ])
        })
    }

    pub fn junior_secondary(&self) -> u32 {
        self.smp_counts.unwrap_or_else(|| {
            saturating_sum(&[
                self.smp_public,
                self.smp_private,
                self.mts_public,
                self.mts_private,
            ])
        })
    }

    pub fn senior_secondary(&self) -> u32 {
        self.sma_counts.unwrap_or_else(|| {
            saturating_sum(&[
                self.sma_public,
                self.sma_private,
                self.ma_public,
                self.ma_private,
            ])
        })
    }
}

/// Markets, finance and local enterprise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Economy {
    pub primary_income: Option<String>,
    pub markets: u32,
    pub banks: u32,
    #[serde(alias = "bank")]
    pub bank_agents: u32,
    pub cooperatives: u32,
    #[serde(alias = "bumdes")]
    pub village_enterprises: u32,
    pub industries: u32,
    pub grocery: u32,
    pub eatery: u32,
    pub restaurant: u32,
    pub supermarket: u32,
    pub hotels: u32,
}

/// Utilities and living conditions, recorded as free-text labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    pub electricity: Option<String>,
    pub electricity_source: Option<String>,
    pub water_source: Option<String>,
    pub water_drink_source: Option<String>,
    pub cooking_fuel: Option<String>,
    pub road_condition: Option<String>,
    #[serde(alias = "State_electricity_company")]
    pub state_grid_households: u32,
    #[serde(alias = "Non_state_electricity_company")]
    pub non_state_grid_households: u32,
    #[serde(alias = "non_electricity")]
    pub households_without_electricity: u32,
}

fn first_label<'a>(labels: &[&'a Option<String>]) -> &'a str {
    labels
        .iter()
        .copied()
        .filter_map(|label| label.as_deref())
        .find(|label| !label.trim().is_empty())
        .unwrap_or("")
}

impl Infrastructure {
    /// Water label, preferring the general source over the drinking-water source
    pub fn water_label(&self) -> &str {
        first_label(&[&self.water_source, &self.water_drink_source])
    }

    pub fn electricity_label(&self) -> &str {
        first_label(&[&self.electricity, &self.electricity_source])
    }

    pub fn cooking_fuel_label(&self) -> &str {
        first_label(&[&self.cooking_fuel])
    }
}

/// Cellular coverage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Digital {
    pub signal_strength: Option<String>,
    pub signal_type: Option<String>,
    #[serde(alias = "bts_count")]
    pub tower_count: u32,
    pub village_information_system: Option<String>,
}

/// Natural hazard occurrences and fatalities. Presentation only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disaster {
    pub warning_system: Option<String>,
    pub drought_exist: Option<String>,
    pub drought_victim: u32,
    pub flood_exist: Option<String>,
    pub flood_victim: u32,
    pub landslide_exist: Option<String>,
    pub landslide_victim: u32,
    pub sea_waves_exist: Option<String>,
    pub sea_waves_victim: u32,
    pub hurricane_exist: Option<String>,
    pub hurricane_victim: u32,
    pub earthquake_exist: Option<String>,
    pub earthquake_victim: u32,
    pub flash_flood_exist: Option<String>,
    pub flash_flood_victim: u32,
    pub tsunami_exist: Option<String>,
    pub tsunami_victim: u32,
    pub volcanic_eruption_exist: Option<String>,
    pub volcanic_eruption_victim: u32,
}

/// Suicide and homicide cases by sex
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criminal {
    pub suicide_count_man: u32,
    pub suicide_count_woman: u32,
    pub murderer_case_man: u32,
    pub murderer_case_woman: u32,
}

/// Places of worship and migrant workers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub religion: u32,
    pub mosque: u32,
    #[serde(alias = "musala")]
    pub prayer_room: u32,
    pub church_christian: u32,
    pub church_catholic: u32,
    #[serde(alias = "migran_man")]
    pub migrant_man: u32,
    #[serde(alias = "migran_woman")]
    pub migrant_woman: u32,
    #[serde(rename = "pub")]
    pub public_house: Option<String>,
}

/// Community security arrangements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    pub maintenance: Option<String>,
    pub security_group: Option<String>,
    #[serde(alias = "pelaporan")]
    pub reporting: Option<String>,
    pub security_system: Option<String>,
    /// Civil defence (linmas) members
    pub linmas: u32,
}

/// Waste handling and pollution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sanitation {
    #[serde(alias = "sampah")]
    pub waste_disposal: Option<String>,
    #[serde(alias = "tiga_r")]
    pub reduce_reuse_recycle: Option<String>,
    #[serde(alias = "bank_sampah")]
    pub waste_bank: Option<String>,
    #[serde(alias = "pemilahan")]
    pub waste_sorting: Option<String>,
    pub toilet: Option<String>,
    #[serde(alias = "limbah_cair")]
    pub liquid_waste: Option<String>,
    pub slum: Option<String>,
    #[serde(alias = "pencemaran_air")]
    pub water_pollution: Option<String>,
    #[serde(alias = "pencemaran_udara")]
    pub air_pollution: Option<String>,
    #[serde(alias = "pencemaran_lingkungan")]
    pub soil_pollution: Option<String>,
}

/// Raw statistical snapshot of a village. Every group is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VillageStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital: Option<Digital>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<Infrastructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy: Option<Economy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disaster: Option<Disaster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criminal: Option<Criminal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
    #[serde(default, alias = "sanitasi", skip_serializing_if = "Option::is_none")]
    pub sanitation: Option<Sanitation>,
}

/// A village record as held by the record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub topography: Option<String>,
    #[serde(default)]
    pub forest_location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub stats: VillageStats,
}

impl Village {
    /// Recorded centroid, if the record carries both coordinates
    pub fn centroid(&self) -> Option<VillageCentroid> {
        Some(VillageCentroid {
            id: self.id.clone(),
            name: self.name.clone(),
            lat: self.latitude?,
            lon: self.longitude?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_census_keys() {
        let json = serde_json::json!({
            "_id": "3524010001",
            "name": "Donorejo",
            "district": "Kembangbahu",
            "latitude": -7.12,
            "longitude": 112.35,
            "health": { "jumlah_dokter": 2, "jumlah_bidan": 5, "jumlah_puskesmas": 1 },
            "economy": { "markets": 1, "bumdes": 2, "bank": 1 },
            "digital": { "signal_strength": "Sinyal kuat", "bts_count": 3 }
        });

        let village: Village = serde_json::from_value(json).unwrap();
        assert_eq!(village.id, "3524010001");

        let health = village.stats.health.unwrap();
        assert_eq!(health.doctors, 2);
        assert_eq!(health.midwives, 5);
        assert_eq!(health.primary_clinics, 1);

        let economy = village.stats.economy.unwrap();
        assert_eq!(economy.village_enterprises, 2);
        assert_eq!(economy.bank_agents, 1);

        assert_eq!(village.stats.digital.unwrap().tower_count, 3);
        assert!(village.stats.education.is_none());
    }

    #[test]
    fn test_education_levels_fall_back_to_breakdown() {
        let education = Education {
            sd_public: 3,
            mi_private: 1,
            smp_public: 1,
            mts_private: 1,
            ..Default::default()
        };
        assert_eq!(education.elementary(), 4);
        assert_eq!(education.junior_secondary(), 2);
        assert_eq!(education.senior_secondary(), 0);

        let explicit = Education {
            sd_counts: Some(100),
            sd_public: 3,
            ..Default::default()
        };
        assert_eq!(explicit.elementary(), 100);
    }

    #[test]
    fn test_infectious_cases_prefers_aggregate() {
        let disease = Disease {
            dengue_cases: 4,
            malaria_cases: 1,
            ..Default::default()
        };
        assert_eq!(disease.total_infectious_cases(), 5);

        let aggregated = Disease {
            dengue_cases: 4,
            infectious_cases: Some(20),
            ..Default::default()
        };
        assert_eq!(aggregated.total_infectious_cases(), 20);
    }

    #[test]
    fn test_count_totals_saturate() {
        let disease = Disease {
            dengue_cases: u32::MAX,
            covid_cases: 1,
            ..Default::default()
        };
        assert_eq!(disease.total_infectious_cases(), u32::MAX);

        let education = Education {
            sd_public: u32::MAX,
            mi_private: 7,
            ..Default::default()
        };
        assert_eq!(education.elementary(), u32::MAX);
    }

    #[test]
    fn test_deserialize_community_groups() {
        let json = serde_json::json!({
            "id": "3524012015",
            "name": "Kemlagi Lor",
            "criminal": { "suicide_count_man": 1 },
            "social": { "mosque": 4, "musala": 12, "pub": "Ada" },
            "security": { "pelaporan": "Ada", "linmas": 9 },
            "sanitasi": { "sampah": "Diangkut", "bank_sampah": "Ada" }
        });

        let village: Village = serde_json::from_value(json).unwrap();
        let stats = &village.stats;
        assert_eq!(stats.criminal.as_ref().unwrap().suicide_count_man, 1);

        let social = stats.social.as_ref().unwrap();
        assert_eq!(social.prayer_room, 12);
        assert_eq!(social.public_house.as_deref(), Some("Ada"));

        assert_eq!(stats.security.as_ref().unwrap().linmas, 9);
        assert_eq!(
            stats.sanitation.as_ref().unwrap().waste_bank.as_deref(),
            Some("Ada")
        );
    }

    #[test]
    fn test_centroid_requires_both_coordinates() {
        let json = serde_json::json!({ "id": "A", "name": "Alpha", "latitude": -7.1 });
        let village: Village = serde_json::from_value(json).unwrap();
        assert!(village.centroid().is_none());

        let json = serde_json::json!({
            "id": "B",
            "name": "Beta",
            "latitude": -7.1,
            "longitude": 112.3
        });
        let village: Village = serde_json::from_value(json).unwrap();
        let centroid = village.centroid().unwrap();
        assert_eq!((centroid.lat, centroid.lon), (-7.1, 112.3));
    }

    #[test]
    fn test_labels_skip_blank_values() {
        let infra = Infrastructure {
            water_source: Some("  ".to_string()),
            water_drink_source: Some("Air leding".to_string()),
            electricity_source: Some("PLN".to_string()),
            ..Default::default()
        };
        assert_eq!(infra.water_label(), "Air leding");
        assert_eq!(infra.electricity_label(), "PLN");
        assert_eq!(infra.cooking_fuel_label(), "");
    }
}
