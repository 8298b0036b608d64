//! Geometry types for village boundaries and coordinates.
//!
//! Boundaries are held as `geo` polygons so containment and distance queries run
//! directly on the computational types. Ring coordinates are (longitude, latitude).

use geo::algorithm::intersects::Intersects;
use geo::{Distance, Euclidean, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::{DesaError, Result};

/// A WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a validated coordinate
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(DesaError::InvalidCoordinate {
                lat,
                lon,
                reason: "latitude and longitude must be finite".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DesaError::InvalidCoordinate {
                lat,
                lon,
                reason: "latitude must be within [-90, 90]".to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DesaError::InvalidCoordinate {
                lat,
                lon,
                reason: "longitude must be within [-180, 180]".to_string(),
            });
        }
        Ok(Self { lat, lon })
    }

    /// Planar point in (lon, lat) order, matching GeoJSON ring coordinates
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Areal boundary of a village
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryShape {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl BoundaryShape {
    /// Containment test with the boundary counted as inside
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        match self {
            BoundaryShape::Polygon(p) => p.intersects(point),
            BoundaryShape::MultiPolygon(mp) => mp.intersects(point),
        }
    }

    /// Euclidean distance in coordinate degrees (not geodesic).
    /// Zero when the point lies inside the shape.
    pub fn planar_distance(&self, point: &Point<f64>) -> f64 {
        match self {
            BoundaryShape::Polygon(p) => Euclidean.distance(point, p),
            BoundaryShape::MultiPolygon(mp) => Euclidean.distance(point, mp),
        }
    }

    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self {
            BoundaryShape::Polygon(p) => geojson::Value::from(p),
            BoundaryShape::MultiPolygon(mp) => geojson::Value::from(mp),
        };
        geojson::Geometry::new(value)
    }
}

impl TryFrom<geo::Geometry<f64>> for BoundaryShape {
    type Error = String;

    fn try_from(geometry: geo::Geometry<f64>) -> std::result::Result<Self, Self::Error> {
        match geometry {
            geo::Geometry::Polygon(p) => Ok(BoundaryShape::Polygon(p)),
            geo::Geometry::MultiPolygon(mp) => Ok(BoundaryShape::MultiPolygon(mp)),
            other => Err(format!(
                "expected Polygon or MultiPolygon, got {}",
                geometry_name(&other)
            )),
        }
    }
}

fn geometry_name(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::Line(_) => "Line",
        geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::Polygon(_) => "Polygon",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        geo::Geometry::Rect(_) => "Rect",
        geo::Geometry::Triangle(_) => "Triangle",
    }
}

/// A village boundary loaded from the boundary dataset
#[derive(Debug, Clone, PartialEq)]
pub struct VillageGeometry {
    pub id: String,
    pub name: String,
    pub geometry: BoundaryShape,
}

/// Representative coordinate recorded for a village
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageCentroid {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}
