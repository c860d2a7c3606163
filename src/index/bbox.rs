use crate::index::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The region covered by an encoded cell, in degrees.
///
/// Invariant: `min_lat <= max_lat` and `min_lng <= max_lng`. A box starts as the
/// whole world and every bisection step halves exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::world()
    }
}

impl BoundingBox {
    /// The full valid range [-90, 90] x [-180, 180].
    pub const fn world() -> Self {
        Self {
            min_lat: MIN_LATITUDE,
            max_lat: MAX_LATITUDE,
            min_lng: MIN_LONGITUDE,
            max_lng: MAX_LONGITUDE,
        }
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Returns the `(lat, lng)` midpoint of the box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Returns the midpoint as a `Point` (x = longitude, y = latitude).
    pub fn center_point(&self) -> Point<f64> {
        let (lat, lng) = self.center();
        Point::new(lng, lat)
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }

    /// Returns true if `other` lies entirely inside this box (shared edges allowed).
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.min_lat <= other.min_lat
            && other.max_lat <= self.max_lat
            && self.min_lng <= other.min_lng
            && other.max_lng <= self.max_lng
    }

    /// Returns the point inside the box with the fewest decimal places per axis.
    ///
    /// Useful for printing a decoded cell without implying more precision than
    /// the cell actually carries.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::bounding_box;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let (lat, lng) = bounding_box("u09tu")?.round();
    /// assert!((lat - 48.83).abs() < 1e-9);
    /// assert!((lng - 2.29).abs() < 1e-9);
    /// # Ok(())
    /// # }
    /// ```
    pub fn round(&self) -> (f64, f64) {
        (
            round_axis(self.min_lat, self.max_lat),
            round_axis(self.min_lng, self.max_lng),
        )
    }

    /// Converts this box to a `geo_types::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lng, y: self.min_lat },
            coord! { x: self.max_lng, y: self.max_lat },
        )
    }

    /// Converts this box to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

/// Smallest multiple of the largest power of ten not exceeding the extent, at or above `min`.
fn round_axis(min: f64, max: f64) -> f64 {
    let extent = max - min;
    if !extent.is_normal() || extent < 0.0 {
        return min;
    }

    let exponent = extent.log10().floor() as i32;
    if exponent < 0 {
        let scale = 10f64.powi(-exponent);
        (min * scale).ceil() / scale
    } else {
        let step = 10f64.powi(exponent);
        (min / step).ceil() * step
    }
}
