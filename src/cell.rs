use crate::config::GeohashConfig;
use crate::coord::Coordinate;
use crate::error::GeohashError;
use crate::haversine::checked_haversine_distance;
use crate::index::{AlphabetKind, BoundingBox, Codec, Neighbors, TablePolicy};
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single geohash cell.
///
/// Each `GeohashCell` holds its encoded identifier together with the decoded
/// center and bounding box, so geometry and distance queries do not need to
/// decode the identifier again.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// // From (lng, lat)
/// let cell = GeohashCell::from_wgs84(&(131.036192, -25.345457), 8)?;
/// assert_eq!(cell.id, "qgmpvf18");
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeohashCell {
    /// Encoded identifier
    pub id: String,
    /// Center of the cell (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Region covered by the cell
    pub bbox: BoundingBox,
    /// Number of symbols in `id`
    pub precision: usize,
    pub alphabet: AlphabetKind,
    /// Policy used by prefix distance estimates from this cell
    #[serde(default)]
    pub table_policy: TablePolicy,
}

impl GeohashCell {
    fn from_parts(id: String, bbox: BoundingBox, alphabet: AlphabetKind) -> Self {
        Self {
            precision: id.len(),
            center: bbox.center_point(),
            id,
            bbox,
            alphabet,
            table_policy: TablePolicy::default(),
        }
    }

    /// Create a base-32 cell from WGS84 (lon/lat) coordinates.
    pub fn from_wgs84(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        Self::from_wgs84_with(coord, &GeohashConfig::new(precision))
    }

    /// Create a cell from WGS84 (lon/lat) coordinates using the config's alphabet,
    /// precision and table policy.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidPrecision`] - the config fails [`GeohashConfig::validate`]
    /// - [`GeohashError::OutOfRange`] - the coordinate is outside WGS84 bounds
    pub fn from_wgs84_with(
        coord: &impl Coordinate,
        config: &GeohashConfig,
    ) -> Result<Self, GeohashError> {
        config.validate()?;
        let (id, bbox) = config.codec().encode_coord(coord, config.precision)?;
        Ok(Self::from_parts(id, bbox, config.alphabet).with_table_policy(config.table_policy))
    }

    /// Create a cell from a base-32 identifier.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_wgs84(&(2.294, 48.858), 7)?;
    /// let restored = GeohashCell::from_geohash(&cell.id)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_geohash(id: &str) -> Result<Self, GeohashError> {
        Self::from_geohash_with(id, AlphabetKind::Base32)
    }

    /// Create a cell from an identifier in the given alphabet.
    pub fn from_geohash_with(id: &str, alphabet: AlphabetKind) -> Result<Self, GeohashError> {
        let bbox = Codec::new(alphabet.alphabet()).bounding_box(id)?;
        Ok(Self::from_parts(id.to_string(), bbox, alphabet))
    }

    /// Sets the policy used by [`GeohashCell::estimate_distance_to`].
    pub fn with_table_policy(mut self, policy: TablePolicy) -> Self {
        self.table_policy = policy;
        self
    }

    pub fn codec(&self) -> Codec<'static> {
        Codec::new(self.alphabet.alphabet())
    }

    /// Returns the latitude of the cell center in degrees.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell center in degrees.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// The enclosing cell one symbol shorter, or `None` for the empty cell.
    pub fn parent(&self) -> Option<Self> {
        let parent_id = self.id.get(..self.id.len().checked_sub(1)?)?;
        let bbox = self.codec().bounding_box(parent_id).ok()?;
        Some(
            Self::from_parts(parent_id.to_string(), bbox, self.alphabet)
                .with_table_policy(self.table_policy),
        )
    }

    /// The cells one symbol longer, in alphabet order.
    pub fn children(&self) -> Vec<Self> {
        let alphabet = self.alphabet.alphabet();
        alphabet
            .symbols()
            .iter()
            .filter_map(|&symbol| {
                let mut id = self.id.clone();
                id.push(symbol as char);
                Self::from_geohash_with(&id, self.alphabet)
                    .ok()
                    .map(|child| child.with_table_policy(self.table_policy))
            })
            .collect()
    }

    /// Returns true if the coordinate lies inside the cell (edges included).
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bbox.contains(coord.y(), coord.x())
    }

    /// This cell and its eight neighbors.
    pub fn neighbors(&self) -> Result<Neighbors, GeohashError> {
        self.codec()
            .neighbors(self.latitude(), self.longitude(), self.precision)
    }

    /// Coarse prefix-based distance estimate to another cell, in meters, using
    /// this cell's table policy.
    pub fn estimate_distance_to(&self, other: &GeohashCell) -> f64 {
        self.estimate_distance_to_with(other, self.table_policy)
    }

    /// Prefix-based distance estimate with an explicit table policy.
    pub fn estimate_distance_to_with(&self, other: &GeohashCell, policy: TablePolicy) -> f64 {
        self.codec()
            .estimate_distance_with(&self.id, &other.id, policy)
    }

    /// Great-circle distance between the two cell centers, in meters.
    pub fn distance_to(&self, other: &GeohashCell) -> Result<f64, GeohashError> {
        checked_haversine_distance(
            self.latitude(),
            self.longitude(),
            other.latitude(),
            other.longitude(),
        )
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.bbox.to_rect()
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` representing the cell boundary,
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox.to_polygon()
    }
}
