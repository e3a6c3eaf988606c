//! Highlight color selection.
//!
//! [`contrast_of`] derives a vivid color that stays visible on top of a given
//! background. The hue snaps to the nearest entry of [`PREFERRED_HUES`] and
//! saturation/lightness are picked from the background's luminance band.
//! Yellows, oranges and browns between 30° and 60° are never produced.
//!
//! ```rust
//! use roster_theme::contrast::{contrast_of, FALLBACK_HIGHLIGHT};
//!
//! assert_eq!(contrast_of("#28204a").to_string(), "#826afb");
//! assert_eq!(contrast_of("not-a-color"), FALLBACK_HIGHLIGHT);
//! ```

use tracing::{debug, trace};

use crate::color::{HexColor, Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hsl};

/// Returned by [`contrast_of`] when its input is not a hex color.
pub const FALLBACK_HIGHLIGHT: HexColor = HexColor::from_rgb(Rgb::new(0xd8, 0x5e, 0x26));

/// Candidate highlight hues in preference order: cyan, blue, magenta, red, lime.
///
/// Earlier entries win ties.
pub const PREFERRED_HUES: [f64; 5] = [210.0, 250.0, 290.0, 330.0, 30.0];

/// Backgrounds darker than this get a bright highlight.
pub const DARK_LUMINANCE: f64 = 0.35;

/// Backgrounds lighter than this get a dark highlight.
pub const LIGHT_LUMINANCE: f64 = 0.65;

/// Open hue interval (degrees) that a highlight never falls into.
pub const EXCLUDED_HUES: (f64, f64) = (30.0, 60.0);

/// Lightness shift applied to mid-luminance backgrounds.
const MID_LIGHTNESS_SHIFT: f64 = 25.0;

/// Luminance band of a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuminanceBand {
    Dark,
    Mid,
    Light,
}

impl LuminanceBand {
    pub fn classify(luminance: f64) -> Self {
        if luminance < DARK_LUMINANCE {
            Self::Dark
        } else if luminance > LIGHT_LUMINANCE {
            Self::Light
        } else {
            Self::Mid
        }
    }

    /// Target `(saturation, lightness)` for a highlight over a background
    /// whose own HSL lightness is `background_l`.
    pub fn target(self, background_l: f64) -> (f64, f64) {
        match self {
            Self::Dark => (95.0, 70.0),
            Self::Light => (90.0, 40.0),
            Self::Mid => {
                let l = if background_l > 50.0 {
                    (background_l - MID_LIGHTNESS_SHIFT).max(35.0)
                } else {
                    (background_l + MID_LIGHTNESS_SHIFT).min(75.0)
                };
                (85.0, l)
            }
        }
    }
}

/// Shortest-arc distance between two hues, in degrees (0-180).
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// The entry of [`PREFERRED_HUES`] closest to `hue`.
pub fn nearest_preferred_hue(hue: f64) -> f64 {
    let mut best = PREFERRED_HUES[0];
    let mut best_distance = f64::INFINITY;
    for candidate in PREFERRED_HUES {
        let distance = hue_distance(candidate, hue);
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }
    best
}

/// Whether `hue` lies strictly inside [`EXCLUDED_HUES`].
pub fn is_excluded_hue(hue: f64) -> bool {
    hue > EXCLUDED_HUES.0 && hue < EXCLUDED_HUES.1
}

/// Compute the highlight color for a hex background.
///
/// Never fails: input that does not parse yields [`FALLBACK_HIGHLIGHT`].
pub fn contrast_of(hex: &str) -> HexColor {
    match hex_to_rgb(hex) {
        Some(rgb) => contrast_of_rgb(rgb),
        None => {
            debug!(contrast.input = %hex, "Unparseable contrast input, using fallback");
            FALLBACK_HIGHLIGHT
        }
    }
}

/// Compute the highlight color for an already-parsed background.
pub fn contrast_of_rgb(rgb: Rgb) -> HexColor {
    let luminance = rgb.luminance();
    let hsl = rgb_to_hsl(rgb);
    let hue = nearest_preferred_hue(hsl.h);
    let band = LuminanceBand::classify(luminance);
    let (s, l) = band.target(hsl.l);

    let out = settle_outside_excluded_hues(hsl_to_rgb(Hsl::new(hue, s, l)));
    trace!(
        contrast.luminance = luminance,
        contrast.band = ?band,
        contrast.hue = hue,
        contrast.output = %out.to_hex(),
        "Contrast color computed"
    );
    out.to_hex()
}

// Rounding a 30° target to 8-bit channels can nudge its hue just past 30°.
// Inside (0°, 60°) red is the max channel and blue the min, so lowering green
// walks the hue back down without touching saturation or lightness.
fn settle_outside_excluded_hues(mut rgb: Rgb) -> Rgb {
    while rgb.g > rgb.b && is_excluded_hue(rgb_to_hsl(rgb).h) {
        rgb.g -= 1;
    }
    rgb
}
