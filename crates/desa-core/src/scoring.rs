//! Rule-based indicator scoring.
//!
//! Every function is a pure transformation of a [`VillageStats`] snapshot. Missing
//! input groups never fail; they produce an explicit "unknown" or "incomplete"
//! status instead.

use crate::models::{
    Digital, Economy, EducationFunnel, EducationStatus, Grade, HealthRadar, HealthStatus,
    IndependenceDetails, IndependenceIndex, Infrastructure, VillageAnalytics, VillageStats,
};

/// Care capacity weight per doctor
pub const DOCTOR_WEIGHT: u32 = 3;
/// Care capacity weight per midwife
pub const MIDWIFE_WEIGHT: u32 = 1;
/// Care capacity weight per primary clinic (puskesmas)
pub const PRIMARY_CLINIC_WEIGHT: u32 = 5;

/// Below this continuation ratio a village is a dropout risk
pub const DROPOUT_RATIO_THRESHOLD: f64 = 0.2;

const STRONG_SIGNAL: &[&str] = &["strong", "kuat"];
const WEAK_SIGNAL: &[&str] = &["weak", "lemah"];
const IMPROVED_WATER: &[&str] = &["piped", "pump", "drilled", "leding", "pompa", "bor"];
const STATE_GRID: &[&str] = &["state grid", "pln"];
const NON_STATE_GRID: &[&str] = &["non-pln", "non pln", "nonpln", "non-state", "non state"];
const CLEAN_FUEL: &[&str] = &["gas", "electric", "listrik"];

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mentions(label: &str, keywords: &[&str]) -> bool {
    let label = label.to_lowercase();
    keywords.iter().any(|k| label.contains(k))
}

/// Capped linear score: `count * per_unit`, at most 100
fn capped(count: u32, per_unit: u32) -> f64 {
    f64::from(count.saturating_mul(per_unit).min(100))
}

/// Health care supply versus infectious disease demand
pub fn health_radar(stats: &VillageStats) -> HealthRadar {
    let Some(health) = &stats.health else {
        return HealthRadar {
            supply: 0,
            demand: 0,
            status: HealthStatus::Unknown,
        };
    };

    let supply = health
        .doctors
        .saturating_mul(DOCTOR_WEIGHT)
        .saturating_add(health.midwives.saturating_mul(MIDWIFE_WEIGHT))
        .saturating_add(health.primary_clinics.saturating_mul(PRIMARY_CLINIC_WEIGHT));

    let demand = stats
        .disease
        .as_ref()
        .map(|d| d.total_infectious_cases())
        .unwrap_or(0);

    let status = if demand > supply {
        HealthStatus::HighRisk
    } else {
        HealthStatus::Safe
    };

    HealthRadar {
        supply,
        demand,
        status,
    }
}

/// Ratio of secondary schools to elementary schools
pub fn education_funnel(stats: &VillageStats) -> EducationFunnel {
    let Some(education) = &stats.education else {
        return EducationFunnel {
            ratio: 0.0,
            status: EducationStatus::Unknown,
        };
    };

    // No elementary school at all is treated as the worst case, not a division error
    let sd = education.elementary();
    if sd == 0 {
        return EducationFunnel {
            ratio: 0.0,
            status: EducationStatus::DropoutRiskZone,
        };
    }

    let secondary = education
        .junior_secondary()
        .saturating_add(education.senior_secondary());
    let ratio = f64::from(secondary) / f64::from(sd);

    // Status uses the unrounded ratio; only the reported value is rounded
    let status = if ratio < DROPOUT_RATIO_THRESHOLD {
        EducationStatus::DropoutRiskZone
    } else {
        EducationStatus::Stable
    };

    EducationFunnel {
        ratio: round2(ratio),
        status,
    }
}

/// Composite of digital, living and economy sub-indices
pub fn independence_index(stats: &VillageStats) -> IndependenceIndex {
    let (Some(digital), Some(infrastructure), Some(economy)) =
        (&stats.digital, &stats.infrastructure, &stats.economy)
    else {
        return IndependenceIndex {
            score: 0.0,
            grade: Grade::IncompleteData,
            details: IndependenceDetails::default(),
        };
    };

    let digital_idx = digital_score(digital);
    let living_idx = living_score(infrastructure);
    let economy_idx = economy_score(economy);

    let score = (digital_idx + living_idx + economy_idx) / 3.0;

    IndependenceIndex {
        score: round2(score),
        grade: grade_for(score),
        details: IndependenceDetails {
            digital: round2(digital_idx),
            living: round2(living_idx),
            economy: round2(economy_idx),
        },
    }
}

/// Compute all three indicators
pub fn analyze(stats: &VillageStats) -> VillageAnalytics {
    VillageAnalytics {
        health_radar: health_radar(stats),
        education_funnel: education_funnel(stats),
        independence_index: independence_index(stats),
    }
}

fn grade_for(score: f64) -> Grade {
    if score > 80.0 {
        Grade::Advanced
    } else if score > 50.0 {
        Grade::Developing
    } else {
        Grade::Underdeveloped
    }
}

fn digital_score(digital: &Digital) -> f64 {
    let signal = digital.signal_strength.as_deref().unwrap_or("");
    let signal_score = if mentions(signal, STRONG_SIGNAL) {
        100.0
    } else if mentions(signal, WEAK_SIGNAL) {
        50.0
    } else {
        0.0
    };

    // Five towers saturate the score
    let tower_score = capped(digital.tower_count, 20);

    (signal_score + tower_score) / 2.0
}

fn living_score(infrastructure: &Infrastructure) -> f64 {
    let water = if mentions(infrastructure.water_label(), IMPROVED_WATER) {
        100.0
    } else {
        50.0
    };

    let electricity_label = infrastructure.electricity_label();
    let electricity = if mentions(electricity_label, STATE_GRID)
        && !mentions(electricity_label, NON_STATE_GRID)
    {
        100.0
    } else {
        0.0
    };

    let fuel = if mentions(infrastructure.cooking_fuel_label(), CLEAN_FUEL) {
        100.0
    } else {
        50.0
    };

    (water + electricity + fuel) / 3.0
}

fn economy_score(economy: &Economy) -> f64 {
    let markets = capped(economy.markets, 20);
    let banks = capped(economy.banks.saturating_add(economy.bank_agents), 50);
    let cooperatives = capped(economy.cooperatives, 20);
    let enterprises = capped(economy.village_enterprises, 50);

    (markets + banks + cooperatives + enterprises) / 4.0
}
