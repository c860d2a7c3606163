use crate::error::GeohashError;
use crate::index::constants::{BASE4_DISTANCES, BASE4_SYMBOLS, BASE32_DISTANCES, BASE32_SYMBOLS};
use serde::{Deserialize, Serialize};

const UNMAPPED: u8 = u8::MAX;

/// Builds the symbol -> bit-group table from the ordered symbol list.
///
/// The decode side is always derived from the encode side, so the two
/// directions cannot drift apart.
const fn decode_table(symbols: &[u8]) -> [u8; 128] {
    let mut table = [UNMAPPED; 128];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// An ordered set of printable ASCII symbols, one per bit-group.
///
/// The alphabet size is always a power of two, so each symbol carries exactly
/// [`bits_per_symbol`](Alphabet::bits_per_symbol) bisection bits. Each alphabet
/// also carries its own shared-prefix distance calibration table.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    symbols: &'static [u8],
    bits_per_symbol: u32,
    decode: [u8; 128],
    distances: &'static [f64],
}

/// The standard 32-symbol geohash alphabet, 5 bits per symbol.
pub static BASE32: Alphabet = Alphabet {
    symbols: BASE32_SYMBOLS,
    bits_per_symbol: 5,
    decode: decode_table(BASE32_SYMBOLS),
    distances: &BASE32_DISTANCES,
};

/// The 4-symbol alphabet (`0`-`3`), 2 bits per symbol.
pub static BASE4: Alphabet = Alphabet {
    symbols: BASE4_SYMBOLS,
    bits_per_symbol: 2,
    decode: decode_table(BASE4_SYMBOLS),
    distances: &BASE4_DISTANCES,
};

impl Alphabet {
    /// Creates a custom alphabet.
    ///
    /// `symbols` must hold a power-of-two number (2 to 64) of distinct
    /// printable ASCII characters. `distances` is the calibration table used
    /// by prefix distance estimation and may be empty.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::{Alphabet, Codec};
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let binary = Alphabet::new(b"01", &[])?;
    /// let (hash, _) = Codec::new(&binary).encode(48.858, 2.294, 8)?;
    /// assert_eq!(hash, "11010000");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(symbols: &'static [u8], distances: &'static [f64]) -> Result<Self, GeohashError> {
        let len = symbols.len();
        if !(2..=64).contains(&len) || !len.is_power_of_two() {
            return Err(GeohashError::InvalidAlphabet(format!(
                "size must be a power of two between 2 and 64, got {}",
                len
            )));
        }
        if let Some(&bad) = symbols.iter().find(|b| !b.is_ascii_graphic()) {
            return Err(GeohashError::InvalidAlphabet(format!(
                "symbol {:#04x} is not printable ASCII",
                bad
            )));
        }

        let decode = decode_table(symbols);
        if let Some((i, &dup)) = symbols
            .iter()
            .enumerate()
            .find(|&(i, &b)| decode[b as usize] as usize != i)
        {
            return Err(GeohashError::InvalidAlphabet(format!(
                "symbol {:?} repeated at position {}",
                dup as char, i
            )));
        }

        Ok(Self {
            symbols,
            bits_per_symbol: len.trailing_zeros(),
            decode,
            distances,
        })
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; alphabets hold at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Bits carried by each symbol (log2 of the alphabet size).
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Symbols in bit-group order.
    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// Calibration table indexed by shared-prefix length, in meters.
    pub fn distances(&self) -> &'static [f64] {
        self.distances
    }

    /// Maps a bit-group to its symbol. Only the low `bits_per_symbol` bits are used.
    pub fn symbol(&self, group: u8) -> char {
        let mask = (self.len() - 1) as u8;
        self.symbols[(group & mask) as usize] as char
    }

    /// Maps a symbol back to its bit-group.
    pub fn group(&self, symbol: char) -> Result<u8, GeohashError> {
        let group = if symbol.is_ascii() {
            self.decode[symbol as usize]
        } else {
            UNMAPPED
        };

        if group == UNMAPPED {
            return Err(GeohashError::InvalidSymbol { symbol });
        }
        Ok(group)
    }

    /// Returns true when every character of `hash` belongs to this alphabet.
    pub fn is_valid(&self, hash: &str) -> bool {
        hash.chars().all(|c| self.group(c).is_ok())
    }
}

/// Selects one of the built-in alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    /// 32 symbols, 5 bits each
    #[default]
    Base32,
    /// 4 symbols, 2 bits each
    Base4,
}

impl AlphabetKind {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetKind::Base32 => &BASE32,
            AlphabetKind::Base4 => &BASE4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        assert_eq!(BASE32.len(), 32);
        assert_eq!(BASE32.bits_per_symbol(), 5);
        assert_eq!(BASE4.len(), 4);
        assert_eq!(BASE4.bits_per_symbol(), 2);
    }

    #[test]
    fn test_bijection_every_group() -> Result<(), GeohashError> {
        for alphabet in [&BASE32, &BASE4] {
            for group in 0..alphabet.len() as u8 {
                let symbol = alphabet.symbol(group);
                assert_eq!(alphabet.group(symbol)?, group);
            }
        }
        Ok(())
    }

    #[test]
    fn test_base32_excludes_ambiguous_letters() {
        for symbol in ['a', 'i', 'l', 'o'] {
            assert_eq!(
                BASE32.group(symbol),
                Err(GeohashError::InvalidSymbol { symbol })
            );
        }
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert!(BASE32.group('b').is_ok());
        assert!(BASE32.group('B').is_err());
    }

    #[test]
    fn test_non_ascii_symbol_rejected() {
        assert_eq!(
            BASE4.group('é'),
            Err(GeohashError::InvalidSymbol { symbol: 'é' })
        );
        assert!(!BASE4.is_valid("01é2"));
        assert!(BASE4.is_valid("0123"));
    }

    #[test]
    fn test_custom_alphabet_validation() {
        assert!(Alphabet::new(b"012", &[]).is_err());
        assert!(Alphabet::new(b"0", &[]).is_err());
        assert!(Alphabet::new(b"0 ", &[]).is_err());
        assert!(matches!(
            Alphabet::new(b"0010", &[]),
            Err(GeohashError::InvalidAlphabet(_))
        ));

        let octal = Alphabet::new(b"01234567", &[]);
        assert!(matches!(octal, Ok(ref a) if a.bits_per_symbol() == 3));
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(AlphabetKind::default().alphabet(), &BASE32);
        assert_eq!(AlphabetKind::Base4.alphabet(), &BASE4);
    }
}
