use crate::error::GeohashError;
use crate::index::{AlphabetKind, Codec, DEFAULT_PRECISION, MAX_STRING_PRECISION, TablePolicy};
use serde::{Deserialize, Serialize};

/// Settings shared by cell construction and batch encoding.
///
/// # Example
/// ```
/// use geohash_rs::{AlphabetKind, GeohashConfig, TablePolicy};
///
/// let config = GeohashConfig::new(24)
///     .alphabet(AlphabetKind::Base4)
///     .table_policy(TablePolicy::ClampToLast);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeohashConfig {
    pub alphabet: AlphabetKind,
    /// Number of symbols per cell
    pub precision: usize,
    /// Behavior of prefix distance estimates past the calibration table
    pub table_policy: TablePolicy,
}

impl Default for GeohashConfig {
    fn default() -> Self {
        Self {
            alphabet: AlphabetKind::default(),
            precision: DEFAULT_PRECISION,
            table_policy: TablePolicy::default(),
        }
    }
}

impl GeohashConfig {
    /// Base-32 config with the given precision.
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub fn alphabet(mut self, alphabet: AlphabetKind) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn table_policy(mut self, policy: TablePolicy) -> Self {
        self.table_policy = policy;
        self
    }

    pub fn codec(&self) -> Codec<'static> {
        Codec::new(self.alphabet.alphabet())
    }

    pub fn validate(&self) -> Result<(), GeohashError> {
        if self.precision > MAX_STRING_PRECISION {
            return Err(GeohashError::InvalidPrecision {
                precision: self.precision,
                max: MAX_STRING_PRECISION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeohashConfig::default();
        assert_eq!(config.alphabet, AlphabetKind::Base32);
        assert_eq!(config.precision, 12);
        assert_eq!(config.table_policy, TablePolicy::Zero);
        assert_eq!(config.codec().alphabet().len(), 32);
    }

    #[test]
    fn test_validate_rejects_large_precision() {
        assert!(GeohashConfig::new(64).validate().is_ok());
        assert_eq!(
            GeohashConfig::new(65).validate(),
            Err(GeohashError::InvalidPrecision {
                precision: 65,
                max: 64
            })
        );
    }

    #[test]
    fn test_deserialize_partial_config() -> Result<(), serde_json::Error> {
        let config: GeohashConfig =
            serde_json::from_str(r#"{"alphabet": "base4", "precision": 20}"#)?;
        assert_eq!(config.alphabet, AlphabetKind::Base4);
        assert_eq!(config.precision, 20);
        assert_eq!(config.table_policy, TablePolicy::Zero);

        let config: GeohashConfig = serde_json::from_str(r#"{"table_policy": "clamp_to_last"}"#)?;
        assert_eq!(config, GeohashConfig::default().table_policy(TablePolicy::ClampToLast));
        Ok(())
    }

    #[test]
    fn test_serialize_round_trip() -> Result<(), serde_json::Error> {
        let config = GeohashConfig::new(8).alphabet(AlphabetKind::Base4);
        let json = serde_json::to_string(&config)?;
        let back: GeohashConfig = serde_json::from_str(&json)?;
        assert_eq!(config, back);
        Ok(())
    }
}
