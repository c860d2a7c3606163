//! # geohash-rs
//!
//! There are currently four main entry points.
//!
//! ### 1. Free functions - base-32 geohashes
//!
//! ```
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! // Uluru in Australian Outback
//! let (lat, lng) = (-25.345457, 131.036192);
//!
//! assert_eq!(geohash_rs::encode(lat, lng)?, "qgmpvf18h86e");
//! assert_eq!(geohash_rs::encode_with_precision(lat, lng, 6)?, "qgmpvf");
//! assert_eq!(geohash_rs::encode_int(lat, lng)?, 0xb3e75db828820cd5);
//!
//! let bbox = geohash_rs::bounding_box("qgmpvf18")?;
//! assert!(bbox.contains(lat, lng));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Codec` - Any Alphabet
//!
//! ```
//! use geohash_rs::Codec;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let base4 = Codec::base4();
//! let (hash, _bbox) = base4.encode(40.088046, 116.604412, 32)?;
//! let neighbors = base4.neighbors(40.088046, 116.604412, 32)?;
//! assert_eq!(neighbors.center(), hash);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::{GeohashCell, GeometryFormat};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_wgs84(&(2.294, 48.858), 7)?;
//! println!("{} at ({}, {})", cell.id, cell.latitude(), cell.longitude());
//! let wkt = cell.to_geometry_string(GeometryFormat::Wkt);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `encode_batch` - Collections of Coordinates
//!
//! ```
//! use geohash_rs::{CellsToGeoJson, GeohashCell, GeohashConfig, encode_batch};
//!
//! let coords = vec![(2.294, 48.858), (131.036192, -25.345457)];
//! let cells: Vec<GeohashCell> = encode_batch(&coords, &GeohashConfig::new(8))
//!     .into_iter()
//!     .filter_map(Result::ok)
//!     .collect();
//! let geojson = cells.to_geojson_string();
//! ```
//!
//! The exact great-circle distance lives in [`haversine_distance`] (which
//! returns `-1.0` on invalid input) and [`checked_haversine_distance`].

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod haversine;
pub mod index;
pub mod io;

pub use cell::GeohashCell;
pub use config::GeohashConfig;
pub use coord::{Axis, Coordinate, validate_lat_lng};
pub use error::GeohashError;
pub use haversine::{checked_haversine_distance, distance_between, haversine_distance};
pub use index::{
    Alphabet, AlphabetKind, BASE4, BASE32, BoundingBox, Codec, DEFAULT_PRECISION, Direction,
    Neighbors, TablePolicy, bounding_box_int, bounding_box_int_with_precision, decode_int,
    decode_int_with_precision, encode_int, encode_int_with_precision,
};
pub use io::{CellsToGeoJson, GeometryFormat, decode_batch, encode_batch, parse_cell_polygon};

pub use geo_types;

/// Encodes a point as a 12-symbol base-32 geohash.
pub fn encode(lat: f64, lng: f64) -> Result<String, GeohashError> {
    encode_with_precision(lat, lng, DEFAULT_PRECISION)
}

/// Encodes a point as a base-32 geohash of `precision` symbols.
pub fn encode_with_precision(lat: f64, lng: f64, precision: usize) -> Result<String, GeohashError> {
    Ok(Codec::base32().encode(lat, lng, precision)?.0)
}

/// Decodes a base-32 geohash to the `(lat, lng)` center of its cell.
pub fn decode(hash: &str) -> Result<(f64, f64), GeohashError> {
    Codec::base32().decode(hash)
}

/// Bounding box of a base-32 geohash.
pub fn bounding_box(hash: &str) -> Result<BoundingBox, GeohashError> {
    Codec::base32().bounding_box(hash)
}

/// The base-32 cell containing a point plus its eight neighbors.
pub fn neighbors(lat: f64, lng: f64, precision: usize) -> Result<Neighbors, GeohashError> {
    Codec::base32().neighbors(lat, lng, precision)
}

/// Coarse prefix-based distance estimate between two base-32 geohashes, in meters.
pub fn estimate_distance(a: &str, b: &str) -> f64 {
    Codec::base32().estimate_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeohashError> {
        let hash = encode(40.088046, 116.604412)?;
        assert_eq!(hash, "wx4uj3u9z9rm");

        let (lat, lng) = decode(&hash)?;
        assert!((lat - 40.088046).abs() < 1e-6);
        assert!((lng - 116.604412).abs() < 1e-6);

        let cell = GeohashCell::from_geohash(&hash)?;
        assert_eq!(cell.bbox, bounding_box(&hash)?);

        let neighbors = cell.neighbors()?;
        assert_eq!(neighbors.len(), 9);
        for (_, id) in neighbors.iter() {
            let other = GeohashCell::from_geohash(id.unwrap_or_default())?;
            assert!(cell.distance_to(&other)? < 1.0);
        }
        Ok(())
    }

    #[test]
    fn test_free_functions_match_codec() -> Result<(), GeohashError> {
        let codec = Codec::base32();
        assert_eq!(
            encode_with_precision(-25.345457, 131.036192, 8)?,
            codec.encode(-25.345457, 131.036192, 8)?.0
        );
        assert_eq!(
            neighbors(48.858, 2.294, 5)?,
            codec.neighbors(48.858, 2.294, 5)?
        );
        assert_eq!(estimate_distance("wx4uj3u9", "wx4g48j6"), 78_000.0);
        Ok(())
    }

    #[test]
    fn test_int_and_string_decode_agree() -> Result<(), GeohashError> {
        let packed = encode_int(48.858, 2.294)?;
        assert_eq!(packed, 0xd0139d52c6b54c69);

        let (lat, lng) = decode_int(packed);
        let (s_lat, s_lng) = decode("u09tunq6")?;
        assert!((lat - s_lat).abs() < 1e-3);
        assert!((lng - s_lng).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_range_rejection() {
        assert!(matches!(
            encode(91.0, 0.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            encode(0.0, 181.0),
            Err(GeohashError::OutOfRange {
                axis: Axis::Longitude,
                ..
            })
        ));
        assert!(encode(90.0, 180.0).is_ok());
    }

    #[test]
    fn test_decode_rejection() {
        assert_eq!(
            decode("u09tO"),
            Err(GeohashError::InvalidSymbol { symbol: 'O' })
        );
    }

    #[test]
    fn test_haversine_sentinel() {
        assert_eq!(haversine_distance(91.0, 0.0, 0.0, 0.0), -1.0);
        assert!(haversine_distance(48.858, 2.294, -25.345457, 131.036192) > 0.0);
    }

    #[test]
    fn test_concurrent_encoding() -> Result<(), GeohashError> {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    encode_with_precision(10.0 * i as f64, 20.0 * i as f64, 10)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let hash = handle.join().expect("encoder thread panicked")?;
            assert_eq!(hash, encode_with_precision(10.0 * i as f64, 20.0 * i as f64, 10)?);
        }
        Ok(())
    }
}
