//! Immutable in-memory store of village boundaries.
//!
//! A store is built once from a boundary dataset and never mutated afterwards, so
//! it can be shared behind an `Arc` and read concurrently without locking.

use chrono::{DateTime, Utc};
use geojson::{Feature, FeatureCollection};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::formats::boundary::{
    parse_feature_collection, read_boundary_file, BoundaryProperties,
};
use crate::models::{BoundaryShape, VillageGeometry};

/// A feature that could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Position of the feature in the source collection
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Outcome of loading a boundary dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedFeature>,
}

/// Write-once collection of village boundaries, kept in source order
#[derive(Debug, Clone)]
pub struct GeometryStore {
    geometries: Vec<VillageGeometry>,
    by_id: HashMap<String, usize>,
    properties: BoundaryProperties,
    loaded_at: DateTime<Utc>,
}

impl GeometryStore {
    /// Build a store from already-constructed geometries
    pub fn from_geometries(geometries: Vec<VillageGeometry>) -> Self {
        Self::build(geometries, BoundaryProperties::default())
    }

    /// Load every areal feature of a collection. Features without an id or with
    /// unusable geometry are skipped with a warning.
    pub fn load(
        collection: &FeatureCollection,
        properties: BoundaryProperties,
    ) -> (Self, LoadReport) {
        let mut geometries = Vec::with_capacity(collection.features.len());
        let mut report = LoadReport::default();

        for (index, feature) in collection.features.iter().enumerate() {
            match village_geometry(feature, &properties) {
                Ok(geometry) => geometries.push(geometry),
                Err(reason) => {
                    let id = properties.id_of(feature);
                    let name = properties.name_of(feature);
                    tracing::warn!(
                        index = index,
                        village_id = id.as_deref().unwrap_or("<none>"),
                        village_name = name.as_deref().unwrap_or("<none>"),
                        reason = %reason,
                        "Skipping boundary feature"
                    );
                    report.skipped.push(SkippedFeature { index, id, reason });
                }
            }
        }

        report.loaded = geometries.len();
        tracing::info!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded village boundaries"
        );

        (Self::build(geometries, properties), report)
    }

    /// Load from GeoJSON text
    pub fn from_geojson_str(
        text: &str,
        properties: BoundaryProperties,
    ) -> Result<(Self, LoadReport)> {
        let collection = parse_feature_collection(text)?;
        Ok(Self::load(&collection, properties))
    }

    /// Load from a boundary dataset file
    pub fn from_path(path: &Path, properties: BoundaryProperties) -> Result<(Self, LoadReport)> {
        tracing::info!(path = %path.display(), "Loading village boundaries");
        let text = read_boundary_file(path)?;
        Self::from_geojson_str(&text, properties)
    }

    fn build(geometries: Vec<VillageGeometry>, properties: BoundaryProperties) -> Self {
        let mut by_id = HashMap::with_capacity(geometries.len());
        for (idx, geometry) in geometries.iter().enumerate() {
            if by_id.contains_key(&geometry.id) {
                tracing::warn!(
                    village_id = %geometry.id,
                    "Duplicate boundary id, keeping the first"
                );
                continue;
            }
            by_id.insert(geometry.id.clone(), idx);
        }

        Self {
            geometries,
            by_id,
            properties,
            loaded_at: Utc::now(),
        }
    }

    /// All boundaries in load order
    pub fn all(&self) -> &[VillageGeometry] {
        &self.geometries
    }

    pub fn iter(&self) -> impl Iterator<Item = &VillageGeometry> {
        self.geometries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&VillageGeometry> {
        self.by_id.get(id).map(|&idx| &self.geometries[idx])
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// When this store was built
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Export the loaded boundaries as GeoJSON, using the same property keys
    /// they were read with
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .geometries
            .iter()
            .map(|village| {
                let mut properties = Map::new();
                properties.insert(
                    self.properties.id_key.clone(),
                    JsonValue::from(village.id.clone()),
                );
                properties.insert(
                    self.properties.name_key.clone(),
                    JsonValue::from(village.name.clone()),
                );
                Feature {
                    bbox: None,
                    geometry: Some(village.geometry.to_geojson()),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// Convert one feature, returning the reason it is unusable on failure
fn village_geometry(
    feature: &Feature,
    properties: &BoundaryProperties,
) -> std::result::Result<VillageGeometry, String> {
    let id = properties
        .id_of(feature)
        .ok_or_else(|| format!("missing '{}' property", properties.id_key))?;

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| "feature has no geometry".to_string())?;

    let geo_geometry = geo::Geometry::<f64>::try_from(geometry.clone())
        .map_err(|e| format!("unparseable geometry: {}", e))?;
    let shape = BoundaryShape::try_from(geo_geometry)?;

    let empty = match &shape {
        BoundaryShape::Polygon(p) => p.exterior().0.is_empty(),
        BoundaryShape::MultiPolygon(mp) => mp.0.iter().all(|p| p.exterior().0.is_empty()),
    };
    if empty {
        return Err("geometry has no coordinates".to_string());
    }

    Ok(VillageGeometry {
        name: properties.name_of(feature).unwrap_or_default(),
        id,
        geometry: shape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[112.0, -7.0], [112.1, -7.0], [112.1, -7.1], [112.0, -7.1], [112.0, -7.0]]]
                },
                "properties": { "iddesa": "3524010001", "nmdesa": "Donorejo" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[112.2, -7.0], [112.3, -7.0], [112.3, -7.1], [112.2, -7.0]]]]
                },
                "properties": { "iddesa": 3524010002, "nmdesa": "Kemlagi Lor" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [112.5, -7.0] },
                "properties": { "iddesa": "3524010003", "nmdesa": "Titik" }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": { "iddesa": "3524010004", "nmdesa": "Kosong" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[113.0, -7.0], [113.1, -7.0], [113.1, -7.1], [113.0, -7.0]]]
                },
                "properties": { "nmdesa": "Tanpa Kode" }
            }
        ]
    }"#;

    #[test]
    fn test_load_skips_bad_features() {
        let (store, report) =
            GeometryStore::from_geojson_str(DATASET, BoundaryProperties::default()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped.len(), 3);

        let skipped: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![2, 3, 4]);
        assert!(report.skipped[0].reason.contains("Point"));
        assert_eq!(report.skipped[2].id, None);
    }

    #[test]
    fn test_load_preserves_order_and_ids() {
        let (store, _) =
            GeometryStore::from_geojson_str(DATASET, BoundaryProperties::default()).unwrap();

        let ids: Vec<&str> = store.all().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["3524010001", "3524010002"]);
        assert_eq!(
            store.get("3524010002").map(|g| g.name.as_str()),
            Some("Kemlagi Lor")
        );
        assert!(matches!(
            store.get("3524010002").unwrap().geometry,
            BoundaryShape::MultiPolygon(_)
        ));
        assert!(store.get("3524010003").is_none());
    }

    #[test]
    fn test_custom_property_keys() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                },
                "properties": { "kode": "A1", "nama": "Alpha" }
            }]
        }"#;

        let (store, report) =
            GeometryStore::from_geojson_str(text, BoundaryProperties::new("kode", "nama")).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(store.get("A1").unwrap().name, "Alpha");
    }

    #[test]
    fn test_loaded_at_is_stamped_on_build() {
        let before = Utc::now();
        let store = GeometryStore::from_geometries(Vec::new());

        assert!(store.loaded_at() >= before);
        assert!(store.loaded_at() <= Utc::now());
    }

    #[test]
    fn test_unreadable_dataset_is_fatal() {
        assert!(GeometryStore::from_geojson_str("{", BoundaryProperties::default()).is_err());
    }

    #[test]
    fn test_feature_collection_export() {
        let (store, _) =
            GeometryStore::from_geojson_str(DATASET, BoundaryProperties::default()).unwrap();
        let fc = store.to_feature_collection();

        assert_eq!(fc.features.len(), 2);
        assert_eq!(
            fc.features[0].property("iddesa").and_then(|v| v.as_str()),
            Some("3524010001")
        );
        assert!(fc.features[1].geometry.is_some());
    }
}
