use crate::index::codec::Codec;
use log::debug;
use serde::{Deserialize, Serialize};

/// What a prefix estimate returns once the shared prefix runs past the calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePolicy {
    /// Return 0 meters.
    #[default]
    Zero,
    /// Return the last (smallest) table entry.
    ClampToLast,
}

/// Length of the longest common character prefix, up to the shorter string.
pub fn shared_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Looks up a shared-prefix length in a calibration table.
pub fn lookup_distance(table: &[f64], prefix: usize, policy: TablePolicy) -> f64 {
    if let Some(&meters) = table.get(prefix) {
        return meters;
    }

    debug!(
        "shared prefix {} beyond calibration table of {} entries",
        prefix,
        table.len()
    );
    match policy {
        TablePolicy::Zero => 0.0,
        TablePolicy::ClampToLast => table.last().copied().unwrap_or(0.0),
    }
}

impl Codec<'_> {
    /// Coarse distance in meters between two cells, from their shared prefix.
    ///
    /// The result is a step function of the shared prefix length: symmetric,
    /// but not a metric (no triangle inequality), and only a rough upper
    /// bound on the true distance. Cells sharing more symbols than the
    /// calibration table covers yield 0; see
    /// [`estimate_distance_with`](Codec::estimate_distance_with) to clamp instead.
    /// Characters are compared as-is, never validated.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::Codec;
    ///
    /// let codec = Codec::base32();
    /// assert_eq!(codec.estimate_distance("wx4uj3u9", "wx4g48j6"), 78_000.0);
    /// assert_eq!(codec.estimate_distance("wx4uj3u9", "u09tunq6"), 20_000_000.0);
    /// ```
    pub fn estimate_distance(&self, a: &str, b: &str) -> f64 {
        self.estimate_distance_with(a, b, TablePolicy::Zero)
    }

    /// Like [`estimate_distance`](Codec::estimate_distance) with an explicit table policy.
    pub fn estimate_distance_with(&self, a: &str, b: &str, policy: TablePolicy) -> f64 {
        lookup_distance(self.alphabet().distances(), shared_prefix_len(a, b), policy)
    }
}
