//! Color types and perceptual color difference.
//!
//! Chroma keys are plain RGB triples. There is no notion of a
//! "named" color: two colors are the same key iff their channels match.
//!
//! - [`Rgb`] - 8-bit sRGB triple used as a registry key
//! - [`space`] - sRGB → CIE XYZ → CIE L*a*b* conversion
//! - [`delta`] - color difference formulas (RGB, CIE76, CIE94, CIEDE2000)

pub mod delta;
pub mod space;

pub use delta::{cie2000, cie2000_lab, cie76, cie76_lab, cie94, cie94_lab, delta_rgb, DeltaAlgorithm};
pub use space::{Lab, Xyz};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An 8-bit sRGB color.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const LIGHT_CYAN: Rgb = Rgb::new(224, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0x00RRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpack from `0x??RRGGBB`; the top byte is ignored.
    pub fn from_u32(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper(self.to_array()))
    }
}

/// Error returned when parsing an [`Rgb`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{input}': expected #rrggbb")]
pub struct ParseRgbError {
    pub input: String,
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `rrggbb` with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let err = || ParseRgbError {
            input: s.to_string(),
        };

        if digits.len() != 6 {
            return Err(err());
        }

        let bytes = hex::decode(digits).map_err(|_| err())?;
        Ok(Rgb::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
