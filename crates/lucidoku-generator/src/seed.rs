//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds print and parse as 64 lowercase hex characters, so a puzzle can
/// be shared and regenerated from its seed alone.
///
/// # Examples
///
/// ```
/// use lucidoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Wraps raw bytes as a seed.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the seed's bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the generator state for this seed.
    ///
    /// The seed is hashed first so that nearby byte patterns still land
    /// on unrelated streams.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error for seed text that is not 64 hex characters.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The input has the wrong number of characters.
    #[display("seed must be 64 hex characters, got {count}")]
    WrongLength {
        /// How many characters were supplied.
        count: usize,
    },
    /// The input contains a character outside `0-9`, `a-f`, and `A-F`.
    #[display("invalid character in seed: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 64 {
            return Err(ParseSeedError::WrongLength { count });
        }
        let mut bytes = [0; 32];
        for (i, character) in s.chars().enumerate() {
            let value =
                hex_value(character).ok_or(ParseSeedError::InvalidCharacter { character })?;
            bytes[i / 2] = bytes[i / 2] << 4 | value;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(character: char) -> Option<u8> {
    #[expect(clippy::cast_possible_truncation)]
    let value = character.to_digit(16)? as u8;
    Some(value)
}

#[cfg(feature = "serde")]
impl serde::Serialize for PuzzleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PuzzleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
