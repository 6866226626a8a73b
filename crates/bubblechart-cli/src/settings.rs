use anyhow::{Context, Result};
use bubblechart_core::ChartConfig;
use std::fs;
use std::path::Path;

/// Read a [`ChartConfig`] from TOML. Missing keys keep their defaults.
pub fn load_from_file(path: &Path) -> Result<ChartConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ChartConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML configuration in {}", path.display()))?;
    Ok(config)
}

/// Config file if given, defaults otherwise, then command-line overrides.
pub fn resolve(
    path: Option<&Path>,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<ChartConfig> {
    let mut config = match path {
        Some(p) => load_from_file(p)?,
        None => ChartConfig::default(),
    };
    if let Some(w) = width {
        config.canvas.width = w;
    }
    if let Some(h) = height {
        config.canvas.height = h;
    }
    config.validate()?;
    Ok(config)
}
