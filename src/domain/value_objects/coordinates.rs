//! Geographic coordinates value object.
//!
//! A validated latitude/longitude pair plus the great-circle distance
//! calculation used by the distance endpoint.

use serde::Serialize;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Raised when a latitude/longitude pair is out of range.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
pub struct InvalidCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair, rejecting values outside
    /// [-90, 90] latitude or [-180, 180] longitude.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
            || latitude.is_nan()
            || longitude.is_nan()
        {
            return Err(InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in kilometers, using the
    /// haversine formula over a spherical earth of radius [`EARTH_RADIUS_KM`].
    pub fn haversine_distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn point(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let london = point(51.5007, -0.1246);
        assert_eq!(london.haversine_distance_km(&london), 0.0);
    }

    #[test]
    fn test_london_to_paris() {
        let london = point(51.5007, -0.1246);
        let paris = point(48.8566, 2.3522);

        let distance = london.haversine_distance_km(&paris);
        assert!(
            (distance - 343.5).abs() < 3.0,
            "expected ~343.5 km, got {distance}"
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = point(40.7128, -74.0060);
        let b = point(34.0522, -118.2437);

        let forward = a.haversine_distance_km(&b);
        let backward = b.haversine_distance_km(&a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let origin = point(0.0, 0.0);
        let east = point(0.0, 1.0);

        let distance = origin.haversine_distance_km(&east);
        // 2 * pi * 6371 / 360
        assert!((distance - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_pole_to_pole_is_half_circumference() {
        let north = point(90.0, 0.0);
        let south = point(-90.0, 0.0);

        let distance = north.haversine_distance_km(&south);
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }

    #[test_case(91.0, 0.0; "latitude above range")]
    #[test_case(-90.5, 0.0; "latitude below range")]
    #[test_case(0.0, 180.1; "longitude above range")]
    #[test_case(0.0, -181.0; "longitude below range")]
    #[test_case(f64::NAN, 0.0; "nan latitude")]
    fn test_out_of_range_rejected(lat: f64, lon: f64) {
        assert!(Coordinates::new(lat, lon).is_err());
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }
}
