//! Rendering a palette for stdout.

use roster_theme::{Palette, PaletteStore, StyleVariables};
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct Report {
    palette: Palette,
    variables: StyleVariables,
}

/// Render the store's current palette in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(store: &PaletteStore, format: OutputFormat, selector: &str) -> anyhow::Result<String> {
    let palette = store.current();
    let variables = store.variables();
    let out = match format {
        OutputFormat::Css => variables.to_css(selector),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&Report { palette, variables })?;
            json.push('\n');
            json
        }
        OutputFormat::Vars => variables
            .iter()
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_theme::{HexColor, ThemeConfig, apply_theme};

    fn store_with(color1: &str) -> PaletteStore {
        let store = PaletteStore::default();
        let config = ThemeConfig::new().color1(HexColor::parse(color1).expect("valid hex"));
        apply_theme(&store, &config);
        store
    }

    #[test]
    fn render_css_default() {
        let css = render(&PaletteStore::default(), OutputFormat::Css, ":root").expect("render");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --gradient-color-1: #020738;\n"));
        assert!(css.contains("  --appointment-new-rgb: 130, 106, 251;\n"));
    }

    #[test]
    fn render_vars() {
        let vars = render(&PaletteStore::default(), OutputFormat::Vars, ":root").expect("render");
        assert_eq!(
            vars,
            "appointment-new-color=#826afb\nappointment-new-rgb=130, 106, 251\n\
             gradient-color-1=#020738\ngradient-color-2=#4e395c\n"
        );
    }

    #[test]
    fn render_json_round_trips_palette() {
        let json = render(&PaletteStore::default(), OutputFormat::Json, ":root").expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["palette"]["highlight"], "#826afb");
        assert_eq!(value["variables"]["gradient-color-2"], "#4e395c");

        let palette: Palette = serde_json::from_value(value["palette"].clone()).expect("palette");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn render_reads_published_palette() {
        let vars = render(&store_with("#ff5733"), OutputFormat::Vars, ":root").expect("render");
        assert!(vars.contains("gradient-color-1=#ff5733\n"));
        assert!(vars.contains("gradient-color-2=#cc2400\n"));
    }
}
