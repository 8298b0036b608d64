use crate::models::Coordinate;

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Length of one degree at the equator. Overestimates east-west distances
/// away from the equator.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Great-circle distance between two coordinates in kilometers
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Convert a planar degree distance to kilometers, truncated to whole meters
pub fn degrees_to_km(degrees: f64) -> f64 {
    (degrees * METERS_PER_DEGREE).floor() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine, Point};

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinate {
            lat: -7.45,
            lon: 112.43,
        };
        assert!(haversine_km(p, p) < 1e-9);
    }

    #[test]
    fn test_haversine_matches_geo() {
        // Paris to London, ~344 km
        let paris = Coordinate {
            lat: 48.8566,
            lon: 2.3522,
        };
        let london = Coordinate {
            lat: 51.5074,
            lon: -0.1276,
        };

        let ours = haversine_km(paris, london);
        let reference = Haversine.distance(
            Point::new(2.3522, 48.8566),
            Point::new(-0.1276, 51.5074),
        ) / 1000.0;

        assert!(
            ours > 339.0 && ours < 349.0,
            "distance {} should be ~344km",
            ours
        );
        assert!((ours - reference).abs() / reference < 1e-3);
    }

    #[test]
    fn test_degrees_to_km_truncates_to_meters() {
        assert_eq!(degrees_to_km(0.0), 0.0);
        assert_eq!(degrees_to_km(0.001), 0.111);
        assert_eq!(degrees_to_km(0.005), 0.556);
    }
}
