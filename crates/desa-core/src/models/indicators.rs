//! Indicator results produced by the scoring engine.
//!
//! Status and grade values serialize to the exact labels consumed by the
//! dashboards, so a missing input group ("Unknown", "Incomplete Data") stays
//! distinguishable from a computed low score.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Unknown,
    Safe,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HealthStatus::Unknown => "Unknown",
            HealthStatus::Safe => "Safe",
            HealthStatus::HighRisk => "High Risk",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStatus {
    Unknown,
    #[serde(rename = "Dropout Risk Zone")]
    DropoutRiskZone,
    Stable,
}

impl fmt::Display for EducationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EducationStatus::Unknown => "Unknown",
            EducationStatus::DropoutRiskZone => "Dropout Risk Zone",
            EducationStatus::Stable => "Stable",
        })
    }
}

/// Independence grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "Incomplete Data")]
    IncompleteData,
    Advanced,
    Developing,
    Underdeveloped,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::IncompleteData => "Incomplete Data",
            Grade::Advanced => "Advanced",
            Grade::Developing => "Developing",
            Grade::Underdeveloped => "Underdeveloped",
        })
    }
}

/// Health care supply against infectious disease demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRadar {
    pub supply: u32,
    pub demand: u32,
    pub status: HealthStatus,
}

/// Secondary to primary school continuation ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationFunnel {
    pub ratio: f64,
    pub status: EducationStatus,
}

/// Sub-indices of the independence index, each in 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndependenceDetails {
    pub digital: f64,
    pub living: f64,
    pub economy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndependenceIndex {
    pub score: f64,
    pub grade: Grade,
    pub details: IndependenceDetails,
}

/// All indicators for one village
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VillageAnalytics {
    pub health_radar: HealthRadar,
    pub education_funnel: EducationFunnel,
    pub independence_index: IndependenceIndex,
}
