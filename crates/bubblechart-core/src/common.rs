// crates/bubblechart-core/src/common.rs
use crate::raw::RawCountry;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Counts are computed from whatever fields are present; records missing a
/// field are skipped for that count rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub regions: usize,
    pub timezones: usize,
    pub total_population: u64,
}

impl DatasetStats {
    pub fn from_countries(countries: &[RawCountry]) -> Self {
        let regions: IndexSet<&str> = countries
            .iter()
            .filter_map(|c| c.region.as_deref())
            .collect();
        let timezones: IndexSet<&str> = countries
            .iter()
            .filter_map(|c| c.timezones.as_deref())
            .flatten()
            .map(String::as_str)
            .collect();
        Self {
            countries: countries.len(),
            regions: regions.len(),
            timezones: timezones.len(),
            total_population: countries
                .iter()
                .filter_map(|c| c.population)
                .fold(0u64, u64::saturating_add),
        }
    }
}
