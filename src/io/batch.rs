use crate::cell::GeohashCell;
use crate::config::GeohashConfig;
use crate::coord::Coordinate;
use crate::error::GeohashError;
use log::trace;
use rayon::prelude::*;

/// Encodes many coordinates in parallel.
///
/// Returns one result per input, in input order; an out-of-range coordinate
/// only fails its own slot.
///
/// # Example
/// ```
/// use geohash_rs::{GeohashConfig, encode_batch};
///
/// let coords = vec![(2.294, 48.858), (116.604412, 40.088046), (0.0, 95.0)];
/// let cells = encode_batch(&coords, &GeohashConfig::new(5));
///
/// assert_eq!(cells.len(), 3);
/// assert!(matches!(&cells[0], Ok(cell) if cell.id == "u09tu"));
/// assert!(cells[2].is_err());
/// ```
pub fn encode_batch<C>(coords: &[C], config: &GeohashConfig) -> Vec<Result<GeohashCell, GeohashError>>
where
    C: Coordinate + Sync,
{
    trace!(
        "encoding {} coordinates at precision {}",
        coords.len(),
        config.precision
    );
    coords
        .par_iter()
        .map(|coord| GeohashCell::from_wgs84_with(coord, config))
        .collect()
}

/// Decodes many identifiers in parallel, in input order.
///
/// Cells take the config's alphabet and table policy.
pub fn decode_batch<S>(ids: &[S], config: &GeohashConfig) -> Vec<Result<GeohashCell, GeohashError>>
where
    S: AsRef<str> + Sync,
{
    trace!("decoding {} identifiers", ids.len());
    ids.par_iter()
        .map(|id| {
            GeohashCell::from_geohash_with(id.as_ref(), config.alphabet)
                .map(|cell| cell.with_table_policy(config.table_policy))
        })
        .collect()
}
