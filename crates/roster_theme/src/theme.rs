//! Theme application: gradient colors in, published palette out.
//!
//! A [`Palette`] is the two gradient background colors plus the highlight
//! color used to mark new appointments. [`apply_theme`] fills in a missing
//! gradient color, computes the highlight, and publishes the result to a
//! [`PaletteStore`].
//!
//! # Example
//!
//! ```rust
//! use roster_theme::{PaletteStore, ThemeConfig, apply_theme};
//!
//! let store = PaletteStore::default();
//! let config = ThemeConfig::from_raw(Some("#020738"), Some("4E395C"));
//! let palette = apply_theme(&store, &config);
//!
//! assert_eq!(palette.highlight.to_string(), "#826afb");
//! assert_eq!(store.current(), palette);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{HexColor, Rgb, hsl_to_rgb};
use crate::config::ThemeConfig;
use crate::contrast::contrast_of_rgb;
use crate::store::{PaletteStore, global_palette};

/// First gradient color shown before any theme is applied.
pub const DEFAULT_PRIMARY: HexColor = HexColor::from_rgb(Rgb::new(0x02, 0x07, 0x38));

/// Second gradient color shown before any theme is applied.
pub const DEFAULT_SECONDARY: HexColor = HexColor::from_rgb(Rgb::new(0x4e, 0x39, 0x5c));

/// Lightness shift between a supplied gradient color and its derived companion.
pub const COMPANION_LIGHTNESS_SHIFT: f64 = 20.0;

/// Bounds for the derived companion's lightness.
const COMPANION_LIGHTNESS_RANGE: (f64, f64) = (10.0, 90.0);

/// The published theme: two gradient colors and a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    /// First gradient color.
    pub primary: HexColor,
    /// Second gradient color.
    pub secondary: HexColor,
    /// Highlight for new items, contrasting with the gradient's average.
    pub highlight: HexColor,
}

impl Palette {
    /// Builds a palette from two gradient colors, computing the highlight.
    pub fn from_gradient(primary: HexColor, secondary: HexColor) -> Self {
        let reference = Rgb::average(primary.to_rgb(), secondary.to_rgb());
        Self {
            primary,
            secondary,
            highlight: contrast_of_rgb(reference),
        }
    }

    /// The highlight color as RGB, for `rgba()` compositing.
    pub fn highlight_rgb(&self) -> Rgb {
        self.highlight.to_rgb()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_gradient(DEFAULT_PRIMARY, DEFAULT_SECONDARY)
    }
}

/// Derive a second gradient color from a single supplied one.
///
/// Keeps hue and saturation and moves lightness 20 points toward the opposite
/// end, staying within 10-90.
pub fn derive_companion(color: HexColor) -> HexColor {
    let hsl = color.to_hsl();
    let shifted = if hsl.l > 50.0 {
        hsl.l - COMPANION_LIGHTNESS_SHIFT
    } else {
        hsl.l + COMPANION_LIGHTNESS_SHIFT
    };
    let (lo, hi) = COMPANION_LIGHTNESS_RANGE;
    hsl_to_rgb(hsl.with_lightness(shifted.clamp(lo, hi))).to_hex()
}

/// Resolve a palette from config without publishing it.
///
/// Returns `None` when neither color is present.
pub fn resolve_palette(config: &ThemeConfig) -> Option<Palette> {
    let (primary, secondary) = match (config.color1, config.color2) {
        (Some(primary), Some(secondary)) => (primary, secondary),
        (Some(primary), None) => {
            let secondary = derive_companion(primary);
            debug!(theme.from = %primary, theme.derived = %secondary, "Derived second gradient color");
            (primary, secondary)
        }
        (None, Some(secondary)) => {
            let primary = derive_companion(secondary);
            debug!(theme.from = %secondary, theme.derived = %primary, "Derived first gradient color");
            (primary, secondary)
        }
        (None, None) => return None,
    };
    Some(Palette::from_gradient(primary, secondary))
}

/// Resolve a palette from config and publish it to `store`.
///
/// With no usable colors this is a no-op and the store's current palette is
/// returned unchanged.
pub fn apply_theme(store: &PaletteStore, config: &ThemeConfig) -> Palette {
    match resolve_palette(config) {
        Some(palette) => {
            store.publish(palette);
            palette
        }
        None => {
            debug!("No theme colors supplied, keeping current palette");
            store.current()
        }
    }
}

/// [`apply_theme`] against the process-wide store.
pub fn apply_global_theme(config: &ThemeConfig) -> Palette {
    apply_theme(global_palette(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).expect("valid hex")
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.primary.to_string(), "#020738");
        assert_eq!(palette.secondary.to_string(), "#4e395c");
        assert_eq!(palette.highlight.to_string(), "#826afb");
    }

    #[test]
    fn test_from_gradient_uses_average() {
        let palette = Palette::from_gradient(hex("#ff5733"), hex("#2e86ab"));
        // Average is #976f6f, a mid-luminance color at hue 0.
        assert_eq!(palette.highlight.to_string(), "#a50d59");
        assert_eq!(palette.highlight_rgb(), Rgb::new(0xa5, 0x0d, 0x59));
    }

    #[test]
    fn test_derive_companion_darkens_light_input() {
        let derived = derive_companion(hex("#ff5733"));
        assert_eq!(derived.to_string(), "#cc2400");
        let (a, b) = (hex("#ff5733").to_hsl(), derived.to_hsl());
        assert!((a.h - b.h).abs() < 1e-9);
        assert!((a.l - 20.0 - b.l).abs() < 1e-9);
    }

    #[test]
    fn test_derive_companion_lightens_dark_input() {
        assert_eq!(derive_companion(hex("#2e86ab")).to_string(), "#68b6d7");
        assert_eq!(derive_companion(hex("#000000")).to_string(), "#333333");
    }

    #[test]
    fn test_derive_companion_clamps() {
        // White sits at lightness 100, so it only drops to 80.
        assert_eq!(derive_companion(hex("#ffffff")).to_string(), "#cccccc");
        assert_eq!(derive_companion(hex("#f5f5f5")).to_string(), "#c2c2c2");
    }

    #[test]
    fn test_resolve_both_colors() {
        let config = ThemeConfig::new().color1(hex("#020738")).color2(hex("#4e395c"));
        let palette = resolve_palette(&config).expect("palette");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_resolve_only_first_color() {
        let config = ThemeConfig::new().color1(hex("#ff5733"));
        let palette = resolve_palette(&config).expect("palette");
        assert_eq!(palette.primary.to_string(), "#ff5733");
        assert_eq!(palette.secondary.to_string(), "#cc2400");
        assert_eq!(palette.highlight.to_string(), "#a5590d");
    }

    #[test]
    fn test_resolve_only_second_color() {
        let config = ThemeConfig::new().color2(hex("#2e86ab"));
        let palette = resolve_palette(&config).expect("palette");
        assert_eq!(palette.primary.to_string(), "#68b6d7");
        assert_eq!(palette.secondary.to_string(), "#2e86ab");
        assert_eq!(palette.highlight.to_string(), "#0d59a5");
    }

    #[test]
    fn test_resolve_nothing() {
        assert_eq!(resolve_palette(&ThemeConfig::new()), None);
    }

    #[test]
    fn test_apply_theme_publishes() {
        let store = PaletteStore::default();
        let config = ThemeConfig::new().color1(hex("#ff5733")).color2(hex("#2e86ab"));
        let palette = apply_theme(&store, &config);
        assert_eq!(store.current(), palette);
        assert_eq!(palette.primary.to_string(), "#ff5733");
    }

    #[test]
    fn test_apply_theme_empty_config_is_noop() {
        let store = PaletteStore::default();
        let first = apply_theme(&store, &ThemeConfig::new().color1(hex("#ff5733")));
        let second = apply_theme(&store, &ThemeConfig::new());
        assert_eq!(first, second);
        assert_eq!(store.current(), first);
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let store = PaletteStore::default();
        let config = ThemeConfig::new().color1(hex("#123456")).color2(hex("#abcdef"));
        let a = apply_theme(&store, &config);
        let b = apply_theme(&store, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_serde() {
        let json = serde_json::to_string(&Palette::default()).expect("serialize");
        assert_eq!(
            json,
            r##"{"primary":"#020738","secondary":"#4e395c","highlight":"#826afb"}"##
        );
        let back: Palette = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Palette::default());
    }
}
