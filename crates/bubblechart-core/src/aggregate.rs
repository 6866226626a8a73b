// crates/bubblechart-core/src/aggregate.rs

//! # Aggregator
//!
//! Turns raw country records into the flat list of [`Item`]s the chart
//! draws. Per-country modes keep input order; per-region modes keep the
//! order in which each region first appears.

use crate::error::Result;
use crate::model::{AggregationMode, CountryMetric, Item, RegionMetric};
use crate::raw::RawCountry;
use indexmap::{IndexMap, IndexSet};

/// Aggregate `countries` under `mode`.
///
/// Fails with [`ChartError::MissingField`](crate::ChartError::MissingField)
/// when a record lacks a field the mode reads. An unrecognized metric is not
/// an error: every item gets value 0.
pub fn aggregate(countries: &[RawCountry], mode: AggregationMode) -> Result<Vec<Item>> {
    let items = match mode {
        AggregationMode::Country(metric) => aggregate_countries(countries, metric)?,
        AggregationMode::Region(metric) => aggregate_regions(countries, metric)?,
    };
    log::debug!(
        "aggregated {} countries into {} items ({mode})",
        countries.len(),
        items.len()
    );
    Ok(items)
}

fn aggregate_countries(countries: &[RawCountry], metric: CountryMetric) -> Result<Vec<Item>> {
    countries
        .iter()
        .map(|c| {
            let value = match metric {
                CountryMetric::Population => c.population()?,
                CountryMetric::Borders => c.borders()?.len() as u64,
                CountryMetric::Timezones => c.timezones()?.len() as u64,
                CountryMetric::Languages => c.languages()?.len() as u64,
                CountryMetric::Unrecognized => 0,
            };
            Ok(Item::new(&c.alpha3_code, value).with_full_name(&c.name))
        })
        .collect()
}

/// Distinct members seen for one region during a single pass.
#[derive(Debug, Default)]
struct RegionAccumulator<'a> {
    countries: IndexSet<&'a str>,
    timezones: IndexSet<&'a str>,
}

impl RegionAccumulator<'_> {
    fn value(&self, metric: RegionMetric) -> u64 {
        match metric {
            RegionMetric::Countries => self.countries.len() as u64,
            RegionMetric::Timezones => self.timezones.len() as u64,
        }
    }
}

fn aggregate_regions(countries: &[RawCountry], metric: RegionMetric) -> Result<Vec<Item>> {
    let mut regions: IndexMap<&str, RegionAccumulator<'_>> = IndexMap::new();

    for c in countries {
        let acc = regions.entry(c.region()?).or_default();
        acc.countries.insert(c.name.as_str());
        acc.timezones
            .extend(c.timezones()?.iter().map(String::as_str));
    }

    Ok(regions
        .iter()
        .map(|(name, acc)| Item::new(*name, acc.value(metric)))
        .collect())
}
