use crate::coord::{Coordinate, validate_lat_lng};
use crate::error::GeohashError;
use crate::index::alphabet::{Alphabet, BASE4, BASE32};
use crate::index::bbox::BoundingBox;
use crate::index::constants::{MAX_INT_BITS, MAX_STRING_PRECISION};

/// Interval-bisection state shared by encoding and decoding.
///
/// Bits alternate between axes starting with longitude: even bit indices
/// narrow the longitude range, odd ones the latitude range. A 1 bit keeps the
/// upper half of the current range, a 0 bit the lower half.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bisector {
    bbox: BoundingBox,
    longitude_turn: bool,
}

impl Bisector {
    pub(crate) fn new() -> Self {
        Self {
            bbox: BoundingBox::world(),
            longitude_turn: true,
        }
    }

    /// Bisects the current axis toward the target and returns the emitted bit.
    ///
    /// A target exactly on the midpoint selects the lower half.
    pub(crate) fn step_toward(&mut self, lat: f64, lng: f64) -> bool {
        let target = if self.longitude_turn { lng } else { lat };
        let (min, max) = self.current_range();
        let bit = target > (min + max) / 2.0;
        self.push(bit);
        bit
    }

    /// Replays one bit, halving the current axis.
    pub(crate) fn push(&mut self, bit: bool) {
        let (min, max) = self.current_range();
        let mid = (min + max) / 2.0;
        let (min, max) = if bit { (mid, max) } else { (min, mid) };

        if self.longitude_turn {
            self.bbox.min_lng = min;
            self.bbox.max_lng = max;
        } else {
            self.bbox.min_lat = min;
            self.bbox.max_lat = max;
        }
        self.longitude_turn = !self.longitude_turn;
    }

    fn current_range(&self) -> (f64, f64) {
        if self.longitude_turn {
            (self.bbox.min_lng, self.bbox.max_lng)
        } else {
            (self.bbox.min_lat, self.bbox.max_lat)
        }
    }

    pub(crate) fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

/// Encodes and decodes cells over a single alphabet.
///
/// `Codec` is a thin, copyable handle; all state lives in the static alphabet
/// tables, so one codec can be shared freely across threads.
///
/// # Example
///
/// ```
/// use geohash_rs::Codec;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let base4 = Codec::base4();
/// let (hash, bbox) = base4.encode(40.088046, 116.604412, 32)?;
/// assert_eq!(hash, "32131021222020331021332212330320");
///
/// let (lat, lng) = base4.decode(&hash)?;
/// assert!(bbox.contains(lat, lng));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    alphabet: &'a Alphabet,
}

impl Codec<'static> {
    /// Codec over the standard 32-symbol alphabet.
    pub fn base32() -> Self {
        Self::new(&BASE32)
    }

    /// Codec over the 4-symbol alphabet.
    pub fn base4() -> Self {
        Self::new(&BASE4)
    }
}

impl<'a> Codec<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Encodes a point into `precision` symbols.
    ///
    /// Returns the cell and its bounding box. The box center is the best
    /// reconstruction of the input; its width and height are the residual
    /// uncertainty.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::OutOfRange`] - latitude outside [-90, 90] or longitude outside [-180, 180]
    /// - [`GeohashError::InvalidPrecision`] - more than `MAX_STRING_PRECISION` symbols requested
    pub fn encode(
        &self,
        lat: f64,
        lng: f64,
        precision: usize,
    ) -> Result<(String, BoundingBox), GeohashError> {
        validate_lat_lng(lat, lng)?;
        if precision > MAX_STRING_PRECISION {
            return Err(GeohashError::InvalidPrecision {
                precision,
                max: MAX_STRING_PRECISION,
            });
        }

        let bits = self.alphabet.bits_per_symbol();
        let mut bisector = Bisector::new();
        let mut hash = String::with_capacity(precision);

        for _ in 0..precision {
            let group = (0..bits).fold(0u8, |group, _| {
                (group << 1) | bisector.step_toward(lat, lng) as u8
            });
            hash.push(self.alphabet.symbol(group));
        }

        Ok((hash, bisector.bbox()))
    }

    /// Encodes a coordinate (x = longitude, y = latitude).
    pub fn encode_coord(
        &self,
        coord: &impl Coordinate,
        precision: usize,
    ) -> Result<(String, BoundingBox), GeohashError> {
        self.encode(coord.y(), coord.x(), precision)
    }

    /// Decodes a cell to the `(lat, lng)` midpoint of its bounding box.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidSymbol`] - a character is not in the alphabet
    pub fn decode(&self, hash: &str) -> Result<(f64, f64), GeohashError> {
        Ok(self.bounding_box(hash)?.center())
    }

    /// Decodes a cell to the point with the fewest decimals inside its box.
    pub fn decode_rounded(&self, hash: &str) -> Result<(f64, f64), GeohashError> {
        Ok(self.bounding_box(hash)?.round())
    }

    /// Recovers the bounding box of a cell.
    ///
    /// An empty string yields the whole world. Every character is checked
    /// before any bisection so an invalid cell produces no partial box.
    pub fn bounding_box(&self, hash: &str) -> Result<BoundingBox, GeohashError> {
        let groups = hash
            .chars()
            .map(|c| self.alphabet.group(c))
            .collect::<Result<Vec<u8>, _>>()?;

        let bits = self.alphabet.bits_per_symbol();
        let mut bisector = Bisector::new();
        for group in groups {
            for shift in (0..bits).rev() {
                bisector.push((group >> shift) & 1 == 1);
            }
        }

        Ok(bisector.bbox())
    }

    /// Packs a cell into the low bits of a `u64`, first symbol most significant.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidPrecision`] - the cell carries more than 64 bits
    /// - [`GeohashError::InvalidSymbol`] - a character is not in the alphabet
    pub fn to_int(&self, hash: &str) -> Result<u64, GeohashError> {
        let bits = self.alphabet.bits_per_symbol();
        let precision = hash.chars().count();
        self.check_int_precision(precision)?;

        hash.chars().try_fold(0u64, |acc, c| {
            let group = self.alphabet.group(c)?;
            Ok((acc << bits) | group as u64)
        })
    }

    /// Unpacks the low `precision * bits_per_symbol` bits of `value` into a cell.
    pub fn from_int(&self, value: u64, precision: usize) -> Result<String, GeohashError> {
        self.check_int_precision(precision)?;

        let bits = self.alphabet.bits_per_symbol() as usize;
        let mask = (self.alphabet.len() - 1) as u64;
        Ok((0..precision)
            .rev()
            .map(|i| self.alphabet.symbol(((value >> (i * bits)) & mask) as u8))
            .collect())
    }

    fn check_int_precision(&self, precision: usize) -> Result<(), GeohashError> {
        let max = MAX_INT_BITS / self.alphabet.bits_per_symbol() as usize;
        if precision > max {
            return Err(GeohashError::InvalidPrecision { precision, max });
        }
        Ok(())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::base32()
    }
}

fn check_int_bits(bits: usize) -> Result<(), GeohashError> {
    if bits > MAX_INT_BITS {
        return Err(GeohashError::InvalidPrecision {
            precision: bits,
            max: MAX_INT_BITS,
        });
    }
    Ok(())
}

/// Encodes a point into a full 64-bit integer cell.
///
/// ```
/// assert_eq!(geohash_rs::encode_int(48.858, 2.294).unwrap(), 0xd0139d52c6b54c69);
/// ```
pub fn encode_int(lat: f64, lng: f64) -> Result<u64, GeohashError> {
    encode_int_with_precision(lat, lng, MAX_INT_BITS)
}

/// Encodes a point into `bits` bisection bits, right-aligned in the result.
pub fn encode_int_with_precision(lat: f64, lng: f64, bits: usize) -> Result<u64, GeohashError> {
    validate_lat_lng(lat, lng)?;
    check_int_bits(bits)?;

    let mut bisector = Bisector::new();
    Ok((0..bits).fold(0u64, |acc, _| {
        (acc << 1) | bisector.step_toward(lat, lng) as u64
    }))
}

/// Decodes a full 64-bit integer cell to its `(lat, lng)` midpoint.
pub fn decode_int(hash: u64) -> (f64, f64) {
    bounding_box_int(hash).center()
}

/// Decodes the low `bits` bits of `hash` to a `(lat, lng)` midpoint.
pub fn decode_int_with_precision(hash: u64, bits: usize) -> Result<(f64, f64), GeohashError> {
    Ok(bounding_box_int_with_precision(hash, bits)?.center())
}

/// Bounding box of a full 64-bit integer cell.
pub fn bounding_box_int(hash: u64) -> BoundingBox {
    let mut bisector = Bisector::new();
    for shift in (0..MAX_INT_BITS).rev() {
        bisector.push((hash >> shift) & 1 == 1);
    }
    bisector.bbox()
}

/// Bounding box of the cell held in the low `bits` bits of `hash`.
pub fn bounding_box_int_with_precision(hash: u64, bits: usize) -> Result<BoundingBox, GeohashError> {
    check_int_bits(bits)?;

    let mut bisector = Bisector::new();
    for shift in (0..bits).rev() {
        bisector.push((hash >> shift) & 1 == 1);
    }
    Ok(bisector.bbox())
}
