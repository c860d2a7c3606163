pub mod alphabet;
pub mod bbox;
pub mod codec;
pub mod constants;
pub mod distance;
pub mod neighbors;

pub use alphabet::{Alphabet, AlphabetKind, BASE4, BASE32};
pub use bbox::BoundingBox;
pub use codec::{
    Codec, bounding_box_int, bounding_box_int_with_precision, decode_int,
    decode_int_with_precision, encode_int, encode_int_with_precision,
};
pub use constants::{
    BASE4_DISTANCES, BASE32_DISTANCES, DEFAULT_PRECISION, EARTH_RADIUS, MAX_INT_BITS,
    MAX_STRING_PRECISION,
};
pub use distance::{TablePolicy, lookup_distance, shared_prefix_len};
pub use neighbors::{Direction, Neighbors};
