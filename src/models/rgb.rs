//! RGB color handling with hex parsing and contrast helpers.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB or #RGB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black, used wherever a palette role is missing.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" (any case).
    ///
    /// # Examples
    ///
    /// ```
    /// use colorspeak::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF6B6B").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 107, 107));
    ///
    /// let black = RgbColor::from_hex("#000").unwrap();
    /// assert_eq!(black, RgbColor::BLACK);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected ASCII hex digits");
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .context(format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .context(format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .context(format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // Shorthand: each digit is doubled (#abc == #aabbcc)
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let value = digit
                        .to_digit(16)
                        .with_context(|| format!("Invalid digit '{digit}' in hex color '{hex}'"))?
                        as u8;
                    *slot = value * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB) or 3 (RGB)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use colorspeak::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// YIQ brightness (0.0-255.0) using the 299/587/114 weights.
    #[must_use]
    pub fn yiq(&self) -> f32 {
        (f32::from(self.r) * 299.0 + f32::from(self.g) * 587.0 + f32::from(self.b) * 114.0)
            / 1000.0
    }

    /// Returns black or white, whichever reads better on top of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorspeak::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#FECA57").unwrap().contrast_text(), RgbColor::BLACK);
    /// assert_eq!(RgbColor::from_hex("#5F27CD").unwrap().contrast_text(), RgbColor::WHITE);
    /// ```
    #[must_use]
    pub fn contrast_text(&self) -> Self {
        if self.yiq() >= 128.0 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Mixes this color over `base` with the given opacity.
    ///
    /// Terminals have no alpha channel, so translucent tints (a muted border
    /// at 12% over a surface, for example) are pre-composited here.
    ///
    /// # Arguments
    ///
    /// * `base` - Color underneath
    /// * `percent` - Opacity of `self` (0-100, clamped)
    #[must_use]
    pub fn blend_over(&self, base: Self, percent: u8) -> Self {
        let alpha = u16::from(percent.min(100));
        let mix = |top: u8, bottom: u8| -> u8 {
            ((u16::from(top) * alpha + u16::from(bottom) * (100 - alpha)) / 100) as u8
        };
        Self::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(
            RgbColor::from_hex("#FF0000").unwrap(),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            RgbColor::from_hex("48dbfb").unwrap(),
            RgbColor::new(0x48, 0xDB, 0xFB)
        );
        assert_eq!(
            RgbColor::from_hex("  #1DD1A1 ").unwrap(),
            RgbColor::new(0x1D, 0xD1, 0xA1)
        );
    }

    #[test]
    fn test_from_hex_shorthand() {
        assert_eq!(RgbColor::from_hex("#000").unwrap(), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("fff").unwrap(), RgbColor::WHITE);
        assert_eq!(
            RgbColor::from_hex("#1a2").unwrap(),
            RgbColor::new(0x11, 0xAA, 0x22)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("#12345").is_err());
        assert!(RgbColor::from_hex("#12345678").is_err());
        assert!(RgbColor::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(0xFF, 0x9F, 0x43).to_hex(), "#FF9F43");
        assert_eq!(RgbColor::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_contrast_text_threshold() {
        // YIQ exactly at the threshold picks black
        let grey = RgbColor::new(128, 128, 128);
        assert!((grey.yiq() - 128.0).abs() < f32::EPSILON);
        assert_eq!(grey.contrast_text(), RgbColor::BLACK);

        let darker = RgbColor::new(127, 127, 127);
        assert_eq!(darker.contrast_text(), RgbColor::WHITE);
    }

    #[test]
    fn test_blend_over() {
        let white = RgbColor::WHITE;
        assert_eq!(white.blend_over(RgbColor::BLACK, 100), white);
        assert_eq!(white.blend_over(RgbColor::BLACK, 0), RgbColor::BLACK);
        assert_eq!(
            white.blend_over(RgbColor::BLACK, 50),
            RgbColor::new(127, 127, 127)
        );
        // Opacity above 100 is clamped
        assert_eq!(white.blend_over(RgbColor::BLACK, 250), white);
    }
}
