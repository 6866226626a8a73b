// crates/bubblechart-core/src/loader/fetch.rs
use super::load_from_reader;
use crate::error::Result;
use crate::raw::CountriesRaw;

/// Download and parse the dataset in one blocking request.
///
/// Single shot: no query parameters, no pagination. Non-2xx responses are
/// reported as [`ChartError::Fetch`](crate::ChartError::Fetch).
pub fn fetch_dataset(url: &str) -> Result<CountriesRaw> {
    log::info!("fetching dataset from {url}");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let countries = load_from_reader(response)?;
    log::debug!("fetched {} countries", countries.len());
    Ok(countries)
}
