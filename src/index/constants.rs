/// Latitude range bounds in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude range bounds in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Largest bit count carried by the integer form.
pub const MAX_INT_BITS: usize = 64;

/// Largest symbol count accepted for the string form.
pub const MAX_STRING_PRECISION: usize = 64;

/// Default number of base-32 symbols.
pub const DEFAULT_PRECISION: usize = 12;

/// The 32 symbols of the standard geohash alphabet (no a, i, l, o).
pub const BASE32_SYMBOLS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// The 4 symbols of the quaternary alphabet.
pub const BASE4_SYMBOLS: &[u8; 4] = b"0123";

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS: f64 = 6_371_393.0;

/// Approximate distance in meters between two base-32 cells sharing `i` leading symbols.
///
/// | shared | lat bits | lng bits | lat error | lng error | km error |
/// |--------|----------|----------|-----------|-----------|----------|
/// | 1      | 2        | 3        | ±23       | ±23       | ±2500    |
/// | 2      | 5        | 5        | ±2.8      | ±5.6      | ±630     |
/// | 3      | 7        | 8        | ±0.70     | ±0.70     | ±78      |
/// | 4      | 10       | 10       | ±0.087    | ±0.18     | ±20      |
/// | 5      | 12       | 13       | ±0.022    | ±0.022    | ±2.4     |
/// | 6      | 15       | 15       | ±0.0027   | ±0.0055   | ±0.61    |
/// | 7      | 17       | 18       | ±0.00068  | ±0.00068  | ±0.076   |
pub const BASE32_DISTANCES: [f64; 8] = [
    20_000_000.0,
    2_500_000.0,
    630_000.0,
    78_000.0,
    20_000.0,
    2_400.0,
    610.0,
    76.0,
];

/// Approximate distance in meters between two base-4 cells sharing `i` leading symbols.
///
/// Each base-4 symbol adds one latitude and one longitude bit, so every entry
/// roughly halves the previous one.
pub const BASE4_DISTANCES: [f64; 25] = [
    20_000_000.0,
    10_000_000.0,
    5_000_000.0,
    2_500_000.0,
    1_250_000.0,
    630_000.0,
    315_000.0,
    157_000.0,
    78_000.0,
    39_000.0,
    20_000.0,
    9_728.0,
    4_864.0,
    2_432.0,
    1_216.0,
    608.0,
    304.0,
    152.0,
    76.0,
    38.0,
    19.0,
    9.5,
    4.75,
    2.37,
    1.18,
];
