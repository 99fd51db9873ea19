//! Bead color handling with hex parsing and the RGB distance metric.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}': expected six hex digits (#RRGGBB)")]
pub struct ParseColorError {
    /// The rejected input string.
    pub input: String,
}

/// A single bead color with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// The canonical text form is `#RRGGBB` uppercase; parsing accepts
/// lowercase digits and an optional leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeadColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl BeadColor {
    /// Creates a new `BeadColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `BeadColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use beadloom::models::BeadColor;
    ///
    /// let color = BeadColor::from_hex("#FF6B6B").unwrap();
    /// assert_eq!(color, BeadColor::new(255, 107, 107));
    ///
    /// let color = BeadColor::from_hex("4fc3f7").unwrap();
    /// assert_eq!(color.to_hex(), "#4FC3F7");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseColorError {
                input: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError {
                input: hex.to_string(),
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use beadloom::models::BeadColor;
    ///
    /// let color = BeadColor::new(255, 107, 107);
    /// assert_eq!(color.to_hex(), "#FF6B6B");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// The result lies in `[0, ~441.7]` (black to white). This is the
    /// contract metric for nearest-color search and background detection;
    /// it is deliberately not a perceptual (Lab/Luv) distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use beadloom::models::BeadColor;
    ///
    /// let black = BeadColor::new(0, 0, 0);
    /// let white = BeadColor::new(255, 255, 255);
    /// assert_eq!(black.distance(&black), 0.0);
    /// assert!((black.distance(&white) - 441.673).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// # Arguments
    ///
    /// * `percent` - Brightness percentage (0-100). 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for BeadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for BeadColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serialized as the canonical hex string so pattern files and palette
// store entries contain "#RRGGBB" values rather than channel structs.
impl Serialize for BeadColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BeadColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(D::Error::custom)
    }
}
