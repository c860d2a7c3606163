use crate::error::GeohashError;
use crate::index::codec::Codec;
use log::warn;

/// Position of a cell relative to the center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Center,
    North,
    South,
    West,
    East,
    NorthWest,
    SouthWest,
    NorthEast,
    SouthEast,
}

impl Direction {
    /// All nine slots in result order.
    pub const ALL: [Direction; 9] = [
        Direction::Center,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::SouthEast,
    ];

    const AROUND: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::SouthEast,
    ];

    /// Returns `(lat, lng)` steps in units of cell height and width.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Center => (0.0, 0.0),
            Direction::North => (1.0, 0.0),
            Direction::South => (-1.0, 0.0),
            Direction::West => (0.0, -1.0),
            Direction::East => (0.0, 1.0),
            Direction::NorthWest => (1.0, -1.0),
            Direction::SouthWest => (-1.0, -1.0),
            Direction::NorthEast => (1.0, 1.0),
            Direction::SouthEast => (-1.0, 1.0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A cell and its eight surrounding cells at the same precision.
///
/// Cells are found by moving the center of the cell by one cell height or
/// width and re-encoding. Nothing wraps around the poles or the antimeridian,
/// so a slot whose shifted center leaves the valid range holds the
/// [`GeohashError::OutOfRange`] produced by encoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors {
    center: String,
    around: [Result<String, GeohashError>; 8],
}

impl Neighbors {
    /// The cell the neighbors were computed for.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Returns the cell in `direction`, or `None` if it falls off the valid range.
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Center => Some(&self.center),
            other => self.around[other.index() - 1].as_deref().ok(),
        }
    }

    /// Returns the full encode result for `direction`.
    pub fn result(&self, direction: Direction) -> Result<&str, &GeohashError> {
        match direction {
            Direction::Center => Ok(&self.center),
            other => self.around[other.index() - 1].as_deref(),
        }
    }

    pub fn north(&self) -> Option<&str> {
        self.get(Direction::North)
    }

    pub fn south(&self) -> Option<&str> {
        self.get(Direction::South)
    }

    pub fn west(&self) -> Option<&str> {
        self.get(Direction::West)
    }

    pub fn east(&self) -> Option<&str> {
        self.get(Direction::East)
    }

    /// Iterates `(direction, cell)` in the fixed order
    /// center, N, S, W, E, NW, SW, NE, SE.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<&str>)> {
        Direction::ALL.into_iter().map(|dir| (dir, self.get(dir)))
    }

    /// Returns the nine slots in the fixed order, `None` where off range.
    pub fn to_array(&self) -> [Option<&str>; 9] {
        Direction::ALL.map(|dir| self.get(dir))
    }

    /// Number of slots that resolved to a cell.
    pub fn len(&self) -> usize {
        1 + self.around.iter().filter(|r| r.is_ok()).count()
    }

    /// Always false; the center cell is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Codec<'_> {
    /// Computes the cell containing a point plus its eight neighbors.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::{Codec, Direction};
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let neighbors = Codec::base32().neighbors(48.858, 2.294, 5)?;
    /// assert_eq!(neighbors.center(), "u09tu");
    /// assert_eq!(neighbors.get(Direction::North), Some("u09wh"));
    /// assert_eq!(neighbors.east(), Some("u09tv"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails only if the point itself cannot be encoded. Off-range neighbors
    /// are reported per slot.
    pub fn neighbors(&self, lat: f64, lng: f64, precision: usize) -> Result<Neighbors, GeohashError> {
        let (center, bbox) = self.encode(lat, lng, precision)?;
        let (center_lat, center_lng) = bbox.center();
        let (height, width) = (bbox.height(), bbox.width());

        let around = Direction::AROUND.map(|dir| {
            let (dlat, dlng) = dir.offset();
            let (n_lat, n_lng) = (center_lat + dlat * height, center_lng + dlng * width);
            self.encode(n_lat, n_lng, precision)
                .map(|(hash, _)| hash)
                .inspect_err(|e| warn!("{:?} neighbor of {} unavailable: {}", dir, center, e))
        });

        Ok(Neighbors { center, around })
    }

    /// Computes the neighbors of an existing cell at its own precision.
    pub fn cell_neighbors(&self, hash: &str) -> Result<Neighbors, GeohashError> {
        let (lat, lng) = self.decode(hash)?;
        self.neighbors(lat, lng, hash.chars().count())
    }
}
