//! Color values and color-space conversion.
//!
//! This module provides the three color representations the theme engine
//! works with:
//! - [`Rgb`] - additive color with 8-bit channels
//! - [`Hsl`] - hue in degrees, saturation and lightness on a 0-100 scale
//! - [`HexColor`] - a validated six-digit hex color, always rendered as `#rrggbb`
//!
//! The free functions [`hex_to_rgb`], [`rgb_to_hex`], [`rgb_to_hsl`] and
//! [`hsl_to_rgb`] are mutually inverse within ±1 per channel.
//!
//! # Example
//!
//! ```rust
//! use roster_theme::color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#FF5733").expect("valid hex");
//! let hsl = rgb_to_hsl(rgb);
//! assert_eq!(rgb_to_hex(hsl_to_rgb(hsl)).to_string(), "#ff5733");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Leading marker accepted (and emitted) in front of the six hex digits.
pub const HEX_MARKER: char = '#';

/// Number of hex digits in a color.
const HEX_DIGITS: usize = 6;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide channel values, clamping each into 0-255.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Per-channel mean of two colors, rounding halves up.
    pub fn average(a: Rgb, b: Rgb) -> Rgb {
        let mean = |x: u8, y: u8| ((u16::from(x) + u16::from(y) + 1) / 2) as u8;
        Rgb::new(mean(a.r, b.r), mean(a.g, b.g), mean(a.b, b.b))
    }

    /// Perceptual luminance in 0.0-1.0 (`0.299 R + 0.587 G + 0.114 B`).
    pub fn luminance(self) -> f64 {
        (f64::from(self.r) * 0.299 + f64::from(self.g) * 0.587 + f64::from(self.b) * 0.114)
            / 255.0
    }

    /// Comma-separated decimal form, e.g. `"130, 106, 251"`, for `rgba()` compositing.
    pub fn to_css_triplet(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    pub fn to_hex(self) -> HexColor {
        rgb_to_hex(self)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.to_rgb()
    }
}

fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// A color in hue/saturation/lightness form.
///
/// `h` is in degrees and wraps modulo 360; `s` and `l` are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Creates a normalized color: hue wrapped into [0, 360), the rest clamped to [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Returns a copy with a different lightness (clamped).
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

/// A validated hex color.
///
/// Displays and serializes as `#rrggbb` in lowercase regardless of how it was
/// written on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    /// Parse exactly six hex digits, optionally preceded by a single `#`.
    ///
    /// # Errors
    /// Returns [`ColorParseError`] for empty input, a wrong digit count, or any
    /// non-hex character.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = s.strip_prefix(HEX_MARKER).unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                value: s.to_string(),
            });
        }
        if digits.len() != HEX_DIGITS {
            return Err(ColorParseError::InvalidLength {
                value: s.to_string(),
                len: digits.len(),
            });
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorParseError::InvalidDigit {
                value: s.to_string(),
            })
        };
        Ok(Self(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }

    /// Trim surrounding whitespace and validate; anything unusable becomes `None`.
    pub fn normalize(raw: &str) -> Option<Self> {
        Self::parse(raw.trim()).ok()
    }

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub const fn to_rgb(self) -> Rgb {
        self.0
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "{HEX_MARKER}{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexColorVisitor)
    }
}

struct HexColorVisitor;

impl Visitor<'_> for HexColorVisitor {
    type Value = HexColor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a six-digit hex color with an optional leading '#'")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        HexColor::parse(v.trim()).map_err(E::custom)
    }
}

/// Error parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("invalid hex color '{value}': expected 6 digits, got {len}")]
    InvalidLength { value: String, len: usize },
    #[error("invalid hex color '{value}': non-hex character")]
    InvalidDigit { value: String },
}

// Conversions

/// Parse a hex color into RGB, or `None` if it is not exactly six hex digits
/// with an optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    HexColor::parse(hex).ok().map(HexColor::to_rgb)
}

/// Encode an RGB color as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor(rgb)
}

/// Encode wide channel values as `#rrggbb`, clamping each into 0-255 first.
pub fn rgb_to_hex_clamped(r: i64, g: i64, b: i64) -> HexColor {
    rgb_to_hex(Rgb::clamped(r, g, b))
}

/// Convert RGB to HSL using the min/max channel algorithm.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
#[allow(clippy::many_single_char_names)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let sum = f64::from(max) + f64::from(min);
    let l = sum / 510.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    // Work on raw channel deltas so that hues on sector boundaries come out exact.
    let d = f64::from(max - min);
    let s = if u16::from(max) + u16::from(min) > 255 {
        d / (510.0 - sum)
    } else {
        d / sum
    };

    let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
    let sector = if rgb.r == max {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if rgb.g == max {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: (sector * 60.0).rem_euclid(360.0),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert HSL to RGB.
///
/// Hue wraps modulo 360 and saturation/lightness are clamped before
/// conversion, so any input produces a valid color.
#[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s <= 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Perceptual luminance of a color in 0.0-1.0.
pub fn luminance(rgb: Rgb) -> f64 {
    rgb.luminance()
}
