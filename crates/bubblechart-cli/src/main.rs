//! bubblechart: command-line bubble charts for country data
//!
//! Usage examples
//! --------------
//!
//! - List the selection tokens
//!   $ bubblechart modes
//!
//! - Dataset summary
//!   $ bubblechart -i countries.json stats
//!
//! - Population table (name, value) in layout order
//!   $ bubblechart -i countries.json chart population
//!
//! - Region chart as JSON with positions and radii
//!   $ bubblechart -i countries.json chart regionTimezones --format json
//!
//! - Draw an SVG on a custom canvas
//!   $ bubblechart -i countries.json chart borders -f svg --width 1200 --height 1200 -o borders.svg
//!
//! Canvas, radius range and simulation settings can be given as TOML via
//! `--config`; see `ChartConfig` in bubblechart-core.
mod args;

use crate::args::{CliArgs, Commands, OutputFormat};
use anyhow::Context;
use bubblechart_cli::{render, settings};
use bubblechart_core::{loader, run_cycle, AggregationMode, DatasetStats, RawCountry};
use clap::Parser;
use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Modes => {
            for token in AggregationMode::TOKENS {
                let mode = AggregationMode::from_token(token);
                println!("{token:<16} {}", mode.label());
            }
        }

        Commands::Stats => {
            let countries = load_countries(args.input.as_deref(), args.url.as_deref())?;
            let stats = DatasetStats::from_countries(&countries);
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Timezones: {}", stats.timezones);
            println!("  Population: {}", stats.total_population);
        }

        Commands::Chart {
            selection,
            format,
            output,
            width,
            height,
        } => {
            let config = settings::resolve(args.config.as_deref(), width, height)?;
            let countries = load_countries(args.input.as_deref(), args.url.as_deref())?;
            let chart = run_cycle(&countries, &selection, &config)
                .with_context(|| format!("Failed to chart selection '{selection}'"))?;
            if chart.report.max_overlap > config.layout.overlap_tolerance {
                log::warn!(
                    "bubbles still overlap by up to {:.3} units",
                    chart.report.max_overlap
                );
            }

            let rendered = match format {
                OutputFormat::Table => render::table(&chart),
                OutputFormat::Json => render::json(&chart)?,
                OutputFormat::Svg => render::svg(&chart, config.canvas),
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_countries(input: Option<&Path>, url: Option<&str>) -> anyhow::Result<Vec<RawCountry>> {
    if let Some(path) = input {
        return loader::load_from_path(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()));
    }
    fetch(url.unwrap_or(loader::DATA_URL))
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> anyhow::Result<Vec<RawCountry>> {
    loader::fetch_dataset(url).with_context(|| format!("Failed to fetch dataset from {url}"))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> anyhow::Result<Vec<RawCountry>> {
    anyhow::bail!("no --input given and this build cannot fetch {url}; rebuild with --features fetch")
}
