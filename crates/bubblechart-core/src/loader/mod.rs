// crates/bubblechart-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip, HTTP) and hands a parsed
//! `Vec<RawCountry>` to the core. The core never sees partial data: any
//! transport or parse failure is returned before aggregation starts.

use crate::error::Result;
use crate::raw::CountriesRaw;
use std::io::Read;
use std::path::Path;

mod common_io;
#[cfg(feature = "fetch")]
mod fetch;

pub use common_io::is_gzip;
#[cfg(feature = "fetch")]
pub use fetch::fetch_dataset;

/// Versioned, static location of the public countries dataset.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/DigitalControlRoom/dcr-javascript-test/main/data/countries.json";

/// Parse a dataset already in memory.
pub fn load_from_str(json: &str) -> Result<CountriesRaw> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a dataset from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<CountriesRaw> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a dataset from disk. Files ending in `.gz` are decompressed when
/// the `compact` feature is enabled.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CountriesRaw> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let countries = load_from_reader(reader)?;
    log::info!("loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}
