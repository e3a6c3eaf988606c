//! Command-line interface for `roster-theme`.
//!
//! # Examples
//!
//! ```bash
//! # Default gradient and highlight as a CSS block
//! roster-theme
//!
//! # One color; the second is derived
//! roster-theme --color1 '#FF5733'
//!
//! # Straight from a dashboard URL
//! roster-theme --query 'https://dash.example/?bgColor1=%23020738&bgColor2=4e395c' --format json
//!
//! # Highlight for a single background
//! roster-theme contrast 28204a
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use roster_theme::ThemeConfig;

/// Compute the dashboard's gradient palette and highlight color.
///
/// Colors are six hex digits with or without a leading '#'. Invalid colors
/// are ignored with a warning. Sources are layered: config file, then
/// query string, then ROSTER_BG_COLOR1 / ROSTER_BG_COLOR2, then flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "roster-theme", author, version, about)]
pub struct Cli {
    /// First gradient color
    #[arg(long)]
    pub color1: Option<String>,

    /// Second gradient color
    #[arg(long)]
    pub color2: Option<String>,

    /// Dashboard query string or full URL carrying bgColor1 / bgColor2
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// TOML or JSON file with bgColor1 / bgColor2 keys
    #[arg(long, short = 'c', env = "ROSTER_THEME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// CSS selector for the rule block in css output
    #[arg(long, default_value = ":root")]
    pub selector: String,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the highlight color for one background color
    Contrast {
        /// Background color (invalid input prints the fallback color)
        color: String,
    },
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSS rule block with custom properties
    #[default]
    Css,
    /// JSON object with the palette and variables
    Json,
    /// One `name=value` line per variable
    Vars,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Resolve the layered theme config, reading colors from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`Cli::layered_config`].
    pub fn theme_config(&self) -> anyhow::Result<ThemeConfig> {
        self.layered_config(ThemeConfig::from_env())
    }

    /// Layer config file, query, `env` and flags, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or the
    /// query looks like a URL but does not parse as one.
    pub fn layered_config(&self, env: ThemeConfig) -> anyhow::Result<ThemeConfig> {
        let mut config = ThemeConfig::new();

        if let Some(path) = &self.config {
            let from_file = ThemeConfig::from_file(path)
                .with_context(|| format!("failed to load theme config {}", path.display()))?;
            config = config.merge(from_file);
        }

        if let Some(query) = &self.query {
            let from_query = if query.contains("://") {
                ThemeConfig::from_url(query).with_context(|| format!("invalid URL {query}"))?
            } else {
                ThemeConfig::from_query(query)
            };
            config = config.merge(from_query);
        }

        let from_flags = ThemeConfig::from_raw(self.color1.as_deref(), self.color2.as_deref());
        Ok(config.merge(env).merge(from_flags))
    }

    /// Log level filter based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
