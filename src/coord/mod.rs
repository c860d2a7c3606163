use crate::error::GeohashError;
use crate::index::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// Following the `geo_types` convention, x is the longitude and y the latitude,
/// so a tuple is read as `(lng, lat)`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// One of the two bisected axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Checks that `lat` lies in [-90, 90] and `lng` in [-180, 180].
///
/// Latitude is checked first. NaN and infinities are rejected as out of range.
pub fn validate_lat_lng(lat: f64, lng: f64) -> Result<(), GeohashError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(GeohashError::out_of_range(Axis::Latitude, lat));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
        return Err(GeohashError::out_of_range(Axis::Longitude, lng));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (131.036192, -25.345457);
        assert_eq!(tuple.x(), 131.036192);
        assert_eq!(tuple.y(), -25.345457);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(2.294, 48.858);
        assert_eq!(point.x(), 2.294);
        assert_eq!(point.y(), 48.858);
    }

    #[test]
    fn test_validate_boundaries_inclusive() {
        assert!(validate_lat_lng(90.0, 180.0).is_ok());
        assert!(validate_lat_lng(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_validate_reports_axis() {
        assert_eq!(
            validate_lat_lng(91.0, 0.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Latitude,
                value: 91.0
            })
        );
        assert_eq!(
            validate_lat_lng(0.0, 181.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Longitude,
                value: 181.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(matches!(
            validate_lat_lng(f64::NAN, 0.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(validate_lat_lng(0.0, f64::INFINITY).is_err());
    }
}
