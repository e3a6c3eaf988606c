#![forbid(unsafe_code)]

//! # roster-theme
//!
//! Prints the dashboard's gradient palette and highlight color.
//!
//! ## Usage
//!
//! ```bash
//! roster-theme --color1 '#020738' --color2 '#4e395c'   # CSS custom properties
//! roster-theme -q '?bgColor1=%23FF5733' -f json        # from a query string
//! roster-theme contrast 28204a                         # single highlight color
//! ```

mod cli;
mod output;

use std::io::{self, Write};

use roster_theme::{apply_global_theme, contrast_of, global_palette};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let out = run(&cli)?;
    io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if let Some(Command::Contrast { color }) = &cli.command {
        return Ok(format!("{}\n", contrast_of(color)));
    }

    let config = cli.theme_config()?;
    apply_global_theme(&config);
    output::render(global_palette(), cli.format, &cli.selector)
}
