use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for bubblechart
#[derive(Debug, Parser)]
#[command(
    name = "bubblechart",
    version,
    about = "Aggregate a countries dataset and lay it out as a bubble chart"
)]
pub struct CliArgs {
    /// Path to the countries JSON (or .json.gz) dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Fetch the dataset from this URL instead of reading a file (needs the 'fetch' feature)
    #[arg(short = 'u', long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// TOML file with canvas, scale and layout settings
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate by a selection and lay out the bubbles
    Chart {
        /// Selection token: population, borders, timezones, languages,
        /// regionCountries or regionTimezones
        selection: String,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Canvas width (overrides the config file)
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height (overrides the config file)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Show a summary of the dataset
    Stats,

    /// List the selection tokens
    Modes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-column name/value table
    Table,
    /// Positioned items as a JSON array
    Json,
    /// Standalone SVG drawing
    Svg,
}
