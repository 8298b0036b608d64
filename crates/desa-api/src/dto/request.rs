use serde::Deserialize;

/// Query string of `/api/nearest-village`
#[derive(Debug, Deserialize)]
pub struct NearestVillageQuery {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub long: f64,
}
