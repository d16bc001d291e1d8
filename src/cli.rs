use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::{ColorMode, FormattingConfig};
pub use crate::io::OutputFormat;
use crate::pipeline::ChartSubject;

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s).ok_or_else(|| format!("expected auto, always or never, got {:?}", s))
}

#[derive(Parser, Debug)]
#[command(name = "standchart")]
#[command(about = "Reveal a stand from a personality chart URL and draw its radar chart", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "plain", global = true)]
    pub plain: bool,

    /// When to color terminal output (auto, always, never)
    #[arg(long = "color", global = true, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,
}

impl Cli {
    /// `--plain` wins, then `--color`, then NO_COLOR / CLICOLOR / CLICOLOR_FORCE
    pub fn formatting_config(&self) -> FormattingConfig {
        match (self.plain, self.color) {
            (true, _) => FormattingConfig::plain(),
            (false, Some(mode)) => FormattingConfig::new(mode),
            (false, None) => FormattingConfig::from_env(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a chart URL and show the closest stand
    Reveal {
        /// Chart URL carrying the ten raw scores
        url: String,

        /// Catalog JSON to match against (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Configuration file (skips the .standchart.toml search)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the radar chart as SVG to this path
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Whose levels the chart shows (overrides config)
        #[arg(long = "chart", value_enum)]
        chart_subject: Option<ChartSubject>,
    },

    /// Initialize a standchart configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the stands in a catalog
    Catalog {
        /// Catalog JSON to list (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Configuration file (skips the .standchart.toml search)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
