//! RGB color values and their `rgb(R, G, B)` text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::{unit_to_channel, RandomSource};

/// A 24-bit color.
///
/// Two tiles may carry equal colors; nothing in the engine compares tiles
/// by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a random color, consuming one value per channel (red, green, blue).
    pub fn random(source: &mut impl RandomSource) -> Self {
        let r = unit_to_channel(source.next_unit());
        let g = unit_to_channel(source.next_unit());
        let b = unit_to_channel(source.next_unit());
        Self { r, g, b }
    }

    /// Text code shown to the player, e.g. `rgb(12, 200, 88)`.
    #[must_use]
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidColorCode(s.to_string());

        let body = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut channels = body.split(',').map(|part| part.trim().parse::<u8>());
        let mut next = || channels.next().and_then(Result::ok).ok_or_else(invalid);
        let color = Self::new(next()?, next()?, next()?);

        if channels.next().is_some() {
            return Err(invalid());
        }
        Ok(color)
    }
}
