use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use sha2::{Digest as _, Sha256};

/// Seed for deterministic riddle generation.
///
/// A 256-bit value initializing the generator's random source. The same seed
/// and options always produce the same riddle, clue wording included. Seeds
/// are printed and parsed as 64 hexadecimal characters.
///
/// # Examples
///
/// ```
/// use riddle_generator::RiddleSeed;
///
/// let seed = RiddleSeed::from_phrase("zebra");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<RiddleSeed>()?, seed);
/// # Ok::<(), riddle_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiddleSeed([u8; 32]);

impl RiddleSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from an arbitrary text phrase (SHA-256 of its UTF-8 bytes).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<u64> for RiddleSeed {
    /// Derives a seed from an integer (SHA-256 of its little-endian bytes).
    fn from(value: u64) -> Self {
        Self(Sha256::digest(value.to_le_bytes()).into())
    }
}

impl Display for RiddleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`RiddleSeed`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("invalid seed: expected 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid seed: {text:?} is not hexadecimal")]
    InvalidHex {
        /// The rejected text.
        text: String,
    },
}

impl FromStr for RiddleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidHex { text: s.to_owned() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| SeedParseError::InvalidHex {
                text: s.to_owned(),
            })?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| SeedParseError::InvalidHex {
                text: s.to_owned(),
            })?;
        }
        Ok(Self(bytes))
    }
}

/// Allows generating random `RiddleSeed` values with `rng.random()`.
impl Distribution<RiddleSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RiddleSeed {
        let mut seed = [0; 32];
        rng.fill(&mut seed);
        RiddleSeed(seed)
    }
}
