use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tier of the resolution cascade produced a result.
///
/// The method also fixes the meaning of `distance_km`: zero for `Exact`,
/// a degree-to-kilometre approximation for `Fuzzy`, and great-circle
/// distance for `CentroidFallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    Exact,
    Fuzzy,
    CentroidFallback,
    ErrorFallback,
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolutionMethod::Exact => "exact",
            ResolutionMethod::Fuzzy => "fuzzy",
            ResolutionMethod::CentroidFallback => "centroid_fallback",
            ResolutionMethod::ErrorFallback => "error_fallback",
        };
        f.write_str(s)
    }
}

/// Village identity resolved for a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub id: String,
    pub name: String,
    pub distance_km: f64,
    pub method: ResolutionMethod,
}

impl ResolutionResult {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        distance_km: f64,
        method: ResolutionMethod,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            distance_km,
            method,
        }
    }
}
