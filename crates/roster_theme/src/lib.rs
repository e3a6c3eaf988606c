#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and color math
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::new_without_default)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! # Roster Theme
//!
//! Gradient background theming for the timetable-changes dashboard.
//!
//! The dashboard background is a two-color gradient supplied from outside
//! (usually the `bgColor1` / `bgColor2` query parameters). This crate:
//! - **Validates** the supplied colors; malformed ones count as absent
//! - **Fills gaps**: one color is enough, the other is derived from it
//! - **Highlights**: computes a vivid color that stays visible on the gradient
//!   and is used to mark new appointments
//! - **Publishes** the resulting [`Palette`] to a [`PaletteStore`] that the
//!   rendering layer reads as CSS custom properties
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_theme::{PaletteStore, ThemeConfig, apply_theme};
//!
//! let store = PaletteStore::default();
//! let config = ThemeConfig::from_query("?bgColor1=%23FF5733");
//! let palette = apply_theme(&store, &config);
//!
//! assert_eq!(palette.secondary.to_string(), "#cc2400");
//! println!("{}", store.variables().to_css(":root"));
//! ```
//!
//! ## Contrast only
//!
//! ```rust
//! use roster_theme::contrast_of;
//!
//! // Dark backgrounds get a bright highlight.
//! assert_eq!(contrast_of("#28204a").to_string(), "#826afb");
//! // Anything unparseable gets the fixed fallback.
//! assert_eq!(contrast_of("nope").to_string(), "#d85e26");
//! ```

pub mod color;
pub mod config;
pub mod contrast;
pub mod store;
pub mod theme;
pub mod variables;

pub use color::{
    ColorParseError, HexColor, Hsl, Rgb, hex_to_rgb, hsl_to_rgb, luminance, rgb_to_hex,
    rgb_to_hex_clamped, rgb_to_hsl,
};
pub use config::{ConfigError, ThemeConfig};
pub use contrast::{FALLBACK_HIGHLIGHT, contrast_of, contrast_of_rgb};
pub use store::{PaletteStore, global_palette};
pub use theme::{Palette, apply_global_theme, apply_theme, derive_companion, resolve_palette};
pub use variables::StyleVariables;
