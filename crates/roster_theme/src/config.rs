//! Where the two gradient colors come from.
//!
//! A [`ThemeConfig`] holds at most two validated colors. It can be built from
//! a dashboard query string (`?bgColor1=%23FF5733&bgColor2=2E86AB`), from the
//! `ROSTER_BG_COLOR1` / `ROSTER_BG_COLOR2` environment variables, or from a
//! TOML/JSON file using the same keys. Values that are not six-digit hex
//! colors are dropped with a warning; they never fail the load.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::{Url, form_urlencoded};

use crate::color::HexColor;

/// Query/file key for the first gradient color.
pub const COLOR1_KEY: &str = "bgColor1";
/// Query/file key for the second gradient color.
pub const COLOR2_KEY: &str = "bgColor2";
/// Environment variable for the first gradient color.
pub const COLOR1_ENV: &str = "ROSTER_BG_COLOR1";
/// Environment variable for the second gradient color.
pub const COLOR2_ENV: &str = "ROSTER_BG_COLOR2";

/// The externally supplied gradient colors, either of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    #[serde(rename = "bgColor1", skip_serializing_if = "Option::is_none")]
    pub color1: Option<HexColor>,
    #[serde(rename = "bgColor2", skip_serializing_if = "Option::is_none")]
    pub color2: Option<HexColor>,
}

/// File representation; colors stay raw so bad ones can be dropped.
#[derive(Debug, Default, Deserialize)]
struct RawThemeConfig {
    #[serde(default, rename = "bgColor1", alias = "color1")]
    color1: Option<RawColor>,
    #[serde(default, rename = "bgColor2", alias = "color2")]
    color2: Option<RawColor>,
}

/// A file value that may not even be a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Other(IgnoredAny),
}

impl RawThemeConfig {
    fn into_config(self) -> ThemeConfig {
        let color1 = text_value(COLOR1_KEY, self.color1);
        let color2 = text_value(COLOR2_KEY, self.color2);
        ThemeConfig::from_raw(color1.as_deref(), color2.as_deref())
    }
}

fn text_value(key: &str, raw: Option<RawColor>) -> Option<String> {
    match raw? {
        RawColor::Text(text) => Some(text),
        RawColor::Other(_) => {
            warn!(theme.key = key, "Ignoring non-string theme color");
            None
        }
    }
}

impl ThemeConfig {
    /// Creates an empty config (no colors supplied).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first gradient color.
    pub fn color1(mut self, color: HexColor) -> Self {
        self.color1 = Some(color);
        self
    }

    /// Sets the second gradient color.
    pub fn color2(mut self, color: HexColor) -> Self {
        self.color2 = Some(color);
        self
    }

    /// Returns true if neither color is present.
    pub fn is_empty(&self) -> bool {
        self.color1.is_none() && self.color2.is_none()
    }

    /// Builds a config from raw strings, trimming and validating each.
    ///
    /// Anything that is not six hex digits (with or without `#`) is treated
    /// as absent.
    pub fn from_raw(color1: Option<&str>, color2: Option<&str>) -> Self {
        Self {
            color1: color1.and_then(|raw| normalize_logged(COLOR1_KEY, raw)),
            color2: color2.and_then(|raw| normalize_logged(COLOR2_KEY, raw)),
        }
    }

    /// Builds a config from key/value pairs; the last occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut color1 = None;
        let mut color2 = None;
        for (key, value) in pairs {
            match key.as_ref() {
                COLOR1_KEY => color1 = Some(value.as_ref().to_string()),
                COLOR2_KEY => color2 = Some(value.as_ref().to_string()),
                _ => {}
            }
        }
        Self::from_raw(color1.as_deref(), color2.as_deref())
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Values are percent-decoded, so `%23FF5733` reads as `#FF5733`.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Parses the query part of a full dashboard URL.
    ///
    /// # Errors
    /// Returns [`ConfigError::Url`] if `url` is not an absolute URL.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(url.trim())?;
        Ok(Self::from_pairs(url.query_pairs()))
    }

    /// Reads [`COLOR1_ENV`] and [`COLOR2_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the environment variable names through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let color1 = lookup(COLOR1_ENV);
        let color2 = lookup(COLOR2_ENV);
        Self::from_raw(color1.as_deref(), color2.as_deref())
    }

    /// Load from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if the text is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawThemeConfig = serde_json::from_str(json)?;
        Ok(raw.into_config())
    }

    /// Load from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] if the text is not valid TOML.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let raw: RawThemeConfig = toml::from_str(toml)?;
        Ok(raw.into_config())
    }

    /// Load from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns [`ConfigError`] if reading or parsing fails, or the extension
    /// is neither `json` nor `toml`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.into())),
            None => Err(ConfigError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Overlay `other` on top of `self`: each color present in `other` wins.
    pub fn merge(self, other: ThemeConfig) -> Self {
        Self {
            color1: other.color1.or(self.color1),
            color2: other.color2.or(self.color2),
        }
    }
}

fn normalize_logged(key: &str, raw: &str) -> Option<HexColor> {
    let color = HexColor::normalize(raw);
    if color.is_none() {
        warn!(theme.key = key, theme.value = %raw, "Ignoring invalid theme color");
    }
    color
}

/// Error loading a theme config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
