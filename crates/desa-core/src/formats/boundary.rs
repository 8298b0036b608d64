//! Village boundary dataset reader
//!
//! Boundary datasets are GeoJSON feature collections published by the statistics
//! agency. Some exports are not valid UTF-8, so text is decoded as UTF-8 first and
//! as Latin-1 when that fails.

use geojson::{FeatureCollection, GeoJson};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DesaError, Result};

/// Property holding the village code in the agency boundary export
pub const DEFAULT_ID_PROPERTY: &str = "iddesa";
/// Property holding the village display name
pub const DEFAULT_NAME_PROPERTY: &str = "nmdesa";

/// Which feature properties carry the village identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryProperties {
    pub id_key: String,
    pub name_key: String,
}

impl Default for BoundaryProperties {
    fn default() -> Self {
        Self {
            id_key: DEFAULT_ID_PROPERTY.to_string(),
            name_key: DEFAULT_NAME_PROPERTY.to_string(),
        }
    }
}

impl BoundaryProperties {
    pub fn new(id_key: impl Into<String>, name_key: impl Into<String>) -> Self {
        Self {
            id_key: id_key.into(),
            name_key: name_key.into(),
        }
    }

    /// Village id of a feature. Numeric codes are stringified.
    pub fn id_of(&self, feature: &geojson::Feature) -> Option<String> {
        match feature.property(&self.id_key)? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn name_of(&self, feature: &geojson::Feature) -> Option<String> {
        feature
            .property(&self.name_key)
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "Boundary dataset is not valid UTF-8, decoding as Latin-1"
            );
            // Every Latin-1 byte maps to the code point of the same value
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Read a boundary dataset file into text
pub fn read_boundary_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DesaError::BoundaryDatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path)?;
    Ok(decode_text(bytes))
}

/// Parse text as a GeoJSON feature collection.
/// A lone feature is accepted as a collection of one.
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = text.parse().map_err(|e| DesaError::BoundaryDatasetInvalid {
        reason: format!("Failed to parse GeoJSON: {}", e),
    })?;

    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => Err(DesaError::BoundaryDatasetInvalid {
            reason: "expected a FeatureCollection, found a bare Geometry".to_string(),
        }),
    }
}
