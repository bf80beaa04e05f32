use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Immutable bidirectional mapping between 6-bit values and Base64 symbols.
///
/// Holds the 64-entry forward table plus a reverse lookup covering exactly
/// the symbols it produces, and the padding symbol. The two tables are exact
/// inverses by construction. Shared by reference from the `static` variant
/// instances; never mutated.
#[derive(Debug)]
pub struct Base64Alphabet {
    forward: [u8; 64],
    reverse: [i8; 128],
    padding: u8,
}

impl Base64Alphabet {
    const fn build(forward: [u8; 64]) -> Self {
        let mut reverse = [-1i8; 128];
        let mut value = 0;
        while value < 64 {
            reverse[forward[value] as usize] = value as i8;
            value += 1;
        }
        Self {
            forward,
            reverse,
            padding: b'=',
        }
    }

    /// Symbol for a 6-bit value. Total for 0..=63; the codec constrains the
    /// input, anything above is masked.
    #[inline]
    pub fn symbol_for(&self, value: u8) -> char {
        self.forward[(value & 0x3F) as usize] as char
    }

    /// 6-bit value for a symbol, or [`Error::InvalidSymbol`] when the symbol
    /// is not one of the 64 in this alphabet. The padding symbol is not a
    /// data symbol and is rejected here; the codec handles it separately.
    pub fn value_for(&self, symbol: char) -> Result<u8, Error> {
        let value = self
            .reverse
            .get(symbol as usize)
            .copied()
            .unwrap_or(-1);
        if value < 0 {
            return Err(Error::InvalidSymbol(symbol));
        }
        Ok(value as u8)
    }

    /// The padding symbol.
    #[inline]
    pub fn padding(&self) -> char {
        self.padding as char
    }
}

/// RFC 4648 §4 standard alphabet.
pub static STANDARD: Base64Alphabet =
    Base64Alphabet::build(*b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

/// RFC 4648 §5 URL-and-filename-safe alphabet.
pub static URL_SAFE: Base64Alphabet =
    Base64Alphabet::build(*b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

/// Named Base64 alphabet variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Base64Variant {
    /// RFC 4648 §4 table (`+`, `/`).
    #[default]
    Standard,
    /// RFC 4648 §5 URL-and-filename-safe table (`-`, `_`).
    UrlSafe,
}

impl Base64Variant {
    /// Resolve to the matching alphabet table.
    pub fn alphabet(&self) -> &'static Base64Alphabet {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }
}

impl std::fmt::Display for Base64Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::UrlSafe => write!(f, "url-safe"),
        }
    }
}

impl std::str::FromStr for Base64Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "url-safe" => Ok(Self::UrlSafe),
            _ => Err(format!(
                "Unknown base64 variant: {s}. Available: standard, url-safe"
            )),
        }
    }
}
