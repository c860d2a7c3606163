use crate::coord::{Coordinate, validate_lat_lng};
use crate::error::GeohashError;
use crate::index::constants::EARTH_RADIUS;
use log::warn;

/// Great-circle distance in meters between two points, using the haversine formula.
///
/// Uses a mean Earth radius of 6,371,393 m.
///
/// # Errors
///
/// - [`GeohashError::OutOfRange`] - any latitude outside [-90, 90] or longitude outside [-180, 180]
///
/// # Example
/// ```
/// use geohash_rs::checked_haversine_distance;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// // Beijing to Shanghai
/// let meters = checked_haversine_distance(39.9042, 116.4074, 31.2304, 121.4737)?;
/// assert!((meters - 1_067_000.0).abs() < 1_000.0);
/// # Ok(())
/// # }
/// ```
pub fn checked_haversine_distance(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
) -> Result<f64, GeohashError> {
    validate_lat_lng(lat1, lng1)?;
    validate_lat_lng(lat2, lng2)?;

    let (rad_lat1, rad_lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lat = (rad_lat1 - rad_lat2).abs();
    let d_lng = lng1.to_radians() - lng2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + rad_lat1.cos() * rad_lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);

    Ok(2.0 * EARTH_RADIUS * a.sqrt().atan2((1.0 - a).sqrt()))
}

/// Sentinel-returning form of [`checked_haversine_distance`].
///
/// Returns `-1.0` when any coordinate is out of range, so callers must check
/// for a negative result.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    checked_haversine_distance(lat1, lng1, lat2, lng2).unwrap_or_else(|e| {
        warn!("haversine distance rejected input: {}", e);
        -1.0
    })
}

/// Great-circle distance between two coordinates (x = longitude, y = latitude).
pub fn distance_between<A: Coordinate, B: Coordinate>(a: &A, b: &B) -> Result<f64, GeohashError> {
    checked_haversine_distance(a.y(), a.x(), b.y(), b.x())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Axis;
    use geo_types::Point;

    #[test]
    fn test_known_city_pairs() -> Result<(), GeohashError> {
        // London to New York, published great-circle ~5570 km
        let d = checked_haversine_distance(51.5074, -0.1278, 40.7128, -74.0060)?;
        assert!((d - 5_570_000.0).abs() < 10_000.0);

        // Beijing to Shanghai, ~1067 km
        let d = checked_haversine_distance(39.9042, 116.4074, 31.2304, 121.4737)?;
        assert!((d - 1_067_000.0).abs() < 5_000.0);
        Ok(())
    }

    #[test]
    fn test_antipodal_is_half_circumference() -> Result<(), GeohashError> {
        let half = std::f64::consts::PI * EARTH_RADIUS;
        assert!((checked_haversine_distance(0.0, 0.0, 0.0, 180.0)? - half).abs() < 1e-6);
        assert!((checked_haversine_distance(90.0, 0.0, -90.0, 0.0)? - half).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_near_antipodal_is_finite() -> Result<(), GeohashError> {
        let half = std::f64::consts::PI * EARTH_RADIUS;

        let d = checked_haversine_distance(-9.9998, -69.9986, 9.9998, 110.0014)?;
        assert!(d.is_finite());
        assert!((d - half).abs() < 1.0);

        let d = haversine_distance(45.0, 10.0, -45.001, -170.0);
        assert!(d.is_finite() && d > 0.0);
        assert!(d <= half);
        Ok(())
    }

    #[test]
    fn test_same_point_is_zero() -> Result<(), GeohashError> {
        assert_eq!(checked_haversine_distance(48.858, 2.294, 48.858, 2.294)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine_distance(40.088046, 116.604412, 39.902783, 116.48455);
        let ba = haversine_distance(39.902783, 116.48455, 40.088046, 116.604412);
        assert!((ab - ba).abs() < 1e-9);
        assert!((ab - 22_993.0).abs() < 1.0);
    }

    #[test]
    fn test_sentinel_on_invalid_input() {
        assert_eq!(haversine_distance(91.0, 0.0, 0.0, 0.0), -1.0);
        assert_eq!(haversine_distance(0.0, 0.0, 0.0, -180.5), -1.0);
    }

    #[test]
    fn test_checked_reports_axis() {
        assert_eq!(
            checked_haversine_distance(0.0, 0.0, -90.5, 0.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Latitude,
                value: -90.5
            })
        );
    }

    #[test]
    fn test_distance_between_points() -> Result<(), GeohashError> {
        let a = Point::new(116.604412, 40.088046);
        let b = (116.48455, 39.902783);
        let d = distance_between(&a, &b)?;
        assert_eq!(d, haversine_distance(40.088046, 116.604412, 39.902783, 116.48455));
        Ok(())
    }
}
