use crate::coord::Axis;
use thiserror::Error;

/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// A latitude or longitude is outside its valid range (or not finite).
    #[error("{axis} out of range: {value}")]
    OutOfRange { axis: Axis, value: f64 },
    /// A character in an encoded cell is not part of the alphabet.
    #[error("Invalid geohash symbol: {symbol:?}")]
    InvalidSymbol { symbol: char },
    /// A custom alphabet is not a usable power-of-two symbol set.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    /// The requested precision does not fit the chosen encoded form.
    #[error("Invalid precision: {precision} (max {max})")]
    InvalidPrecision { precision: usize, max: usize },
    /// Failed to parse a cell geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParse(String),
}

impl GeohashError {
    pub(crate) fn out_of_range(axis: Axis, value: f64) -> Self {
        GeohashError::OutOfRange { axis, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_axis() {
        let err = GeohashError::out_of_range(Axis::Latitude, 91.0);
        assert_eq!(err.to_string(), "latitude out of range: 91");

        let err = GeohashError::out_of_range(Axis::Longitude, -181.5);
        assert_eq!(err.to_string(), "longitude out of range: -181.5");
    }

    #[test]
    fn test_display_invalid_symbol() {
        let err = GeohashError::InvalidSymbol { symbol: 'a' };
        assert_eq!(err.to_string(), "Invalid geohash symbol: 'a'");
    }
}
