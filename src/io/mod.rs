pub mod batch;
pub mod geometry;

pub use batch::{decode_batch, encode_batch};
pub use geometry::{CellsToGeoJson, GeometryFormat, parse_cell_polygon};
