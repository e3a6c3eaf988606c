//! Named style values (CSS custom properties) for the rendering layer.
//!
//! The dashboard stylesheet reads the palette through four variables:
//! `--gradient-color-1`, `--gradient-color-2`, `--appointment-new-color` and
//! `--appointment-new-rgb` (the highlight as `r, g, b` for use in `rgba()`).

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::theme::Palette;

pub const GRADIENT_COLOR_1: &str = "gradient-color-1";
pub const GRADIENT_COLOR_2: &str = "gradient-color-2";
pub const HIGHLIGHT_COLOR: &str = "appointment-new-color";
pub const HIGHLIGHT_RGB: &str = "appointment-new-rgb";

/// CSS custom properties, keyed without the leading `--`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleVariables {
    variables: BTreeMap<String, String>,
}

impl StyleVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four palette variables.
    pub fn from_palette(palette: &Palette) -> Self {
        let mut vars = Self::new();
        vars.set(GRADIENT_COLOR_1, palette.primary.to_string());
        vars.set(GRADIENT_COLOR_2, palette.secondary.to_string());
        vars.set(HIGHLIGHT_COLOR, palette.highlight.to_string());
        vars.set(HIGHLIGHT_RGB, palette.highlight_rgb().to_css_triplet());
        vars
    }

    /// Set a variable. A leading `--` on the name is ignored.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(String::as_str)
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a CSS rule block for `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_palette() {
        let vars = StyleVariables::from_palette(&Palette::default());
        assert_eq!(vars.iter().count(), 4);
        assert_eq!(vars.get(GRADIENT_COLOR_1), Some("#020738"));
        assert_eq!(vars.get(GRADIENT_COLOR_2), Some("#4e395c"));
        assert_eq!(vars.get(HIGHLIGHT_COLOR), Some("#826afb"));
        assert_eq!(vars.get(HIGHLIGHT_RGB), Some("130, 106, 251"));
    }

    #[test]
    fn test_dashes_are_optional() {
        let mut vars = StyleVariables::new();
        vars.set("--accent", "#ffffff");
        assert_eq!(vars.get("accent"), Some("#ffffff"));
        assert_eq!(vars.get("--accent"), Some("#ffffff"));
        assert_eq!(vars.get("missing"), None);
    }

    #[test]
    fn test_to_css() {
        let css = StyleVariables::from_palette(&Palette::default()).to_css(":root");
        assert_eq!(
            css,
            ":root {\n  --appointment-new-color: #826afb;\n  --appointment-new-rgb: 130, 106, 251;\n  --gradient-color-1: #020738;\n  --gradient-color-2: #4e395c;\n}\n"
        );
    }

    #[test]
    fn test_serialize_as_map() {
        let mut vars = StyleVariables::new();
        vars.set("gradient-color-1", "#000000");
        assert_eq!(
            serde_json::to_string(&vars).expect("serialize"),
            r##"{"gradient-color-1":"#000000"}"##
        );
    }
}
