//! Color value types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// 8-bit per channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// HSV color with every component scaled to 0-255
///
/// Hue covers the full color wheel in 256 steps, so sector boundaries sit at
/// multiples of 43 rather than 60 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvColor {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl HsvColor {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// A 24-bit packed `0xRRGGBB` tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintColor(u32);

impl TintColor {
    /// The tint used when none is configured.
    pub const DEFAULT: TintColor = TintColor(0xa4b6c7);

    /// Returns `None` if `packed` has bits above the low 24.
    pub const fn new(packed: u32) -> Option<Self> {
        if packed > 0x00ff_ffff {
            None
        } else {
            Some(Self(packed))
        }
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Unpacks R from bits 16-23, G from bits 8-15 and B from bits 0-7.
    pub const fn to_rgb(self) -> RgbColor {
        RgbColor {
            r: ((self.0 >> 16) & 0xff) as u8,
            g: ((self.0 >> 8) & 0xff) as u8,
            b: (self.0 & 0xff) as u8,
        }
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<RgbColor> for TintColor {
    fn from(rgb: RgbColor) -> Self {
        Self(u32::from(rgb.r) << 16 | u32::from(rgb.g) << 8 | u32::from(rgb.b))
    }
}

impl fmt::Display for TintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Accepts `a4b6c7`, `#a4b6c7` and `0xa4b6c7` (case-insensitive).
impl FromStr for TintColor {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConversionError::InvalidTint(format!(
                "expected six hex digits, got {:?}",
                s
            )));
        }

        let packed = u32::from_str_radix(digits, 16)
            .map_err(|e| ConversionError::InvalidTint(format!("{:?}: {}", s, e)))?;
        Ok(Self(packed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_byte_order() {
        let rgb = TintColor::DEFAULT.to_rgb();
        assert_eq!(rgb, RgbColor::new(0xa4, 0xb6, 0xc7));
        assert_eq!(TintColor::from(rgb), TintColor::DEFAULT);
    }

    #[test]
    fn test_rejects_values_above_24_bits() {
        assert!(TintColor::new(0x01_000000).is_none());
        assert_eq!(TintColor::new(0xffffff).map(TintColor::packed), Some(0xffffff));
    }

    #[test]
    fn test_parse_prefixes() {
        for input in ["a4b6c7", "#a4b6c7", "0xa4b6c7", "0XA4B6C7", " #A4B6C7 "] {
            let tint: TintColor = input.parse().unwrap();
            assert_eq!(tint, TintColor::DEFAULT, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "#fff", "a4b6c7ff", "zzzzzz", "+a4b6c"] {
            let result = input.parse::<TintColor>();
            assert!(
                matches!(result, Err(ConversionError::InvalidTint(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        let tint = TintColor::new(0x00ff00).unwrap();
        assert_eq!(tint.to_string(), "#00ff00");
        assert_eq!(tint.to_string().parse::<TintColor>().unwrap(), tint);
    }
}
