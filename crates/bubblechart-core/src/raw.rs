// crates/bubblechart-core/src/raw.rs
use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// A language entry as it appears in the dataset.
///
/// The public countries dataset stores languages as objects
/// (`{"iso639_1": "sv", "name": "Swedish", ...}`), while hand-written
/// fixtures usually use bare codes. Only the number of entries matters
/// for aggregation, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageRaw {
    Code(String),
    Detailed {
        #[serde(default)]
        iso639_1: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

/// Raw country structure as it comes from JSON.
///
/// `name` and `alpha3Code` identify a record and are required. The metric
/// fields may be absent; that only becomes an error when an aggregation
/// mode actually reads the field (see [`RawCountry::borders`] and friends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: String,
    #[serde(rename = "alpha3Code")]
    pub alpha3_code: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<LanguageRaw>>,
    #[serde(default)]
    pub region: Option<String>,
}

pub type CountriesRaw = Vec<RawCountry>;

impl RawCountry {
    /// Minimal record with every metric field present and empty.
    pub fn new(name: impl Into<String>, alpha3_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alpha3_code: alpha3_code.into(),
            population: Some(0),
            borders: Some(Vec::new()),
            timezones: Some(Vec::new()),
            languages: Some(Vec::new()),
            region: None,
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_borders<I, S>(mut self, borders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.borders = Some(borders.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_timezones<I, S>(mut self, timezones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timezones = Some(timezones.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(
            codes
                .into_iter()
                .map(|c| LanguageRaw::Code(c.into()))
                .collect(),
        );
        self
    }

    pub fn population(&self) -> Result<u64> {
        self.population.ok_or_else(|| self.missing("population"))
    }

    pub fn borders(&self) -> Result<&[String]> {
        self.borders.as_deref().ok_or_else(|| self.missing("borders"))
    }

    pub fn timezones(&self) -> Result<&[String]> {
        self.timezones
            .as_deref()
            .ok_or_else(|| self.missing("timezones"))
    }

    pub fn languages(&self) -> Result<&[LanguageRaw]> {
        self.languages
            .as_deref()
            .ok_or_else(|| self.missing("languages"))
    }

    pub fn region(&self) -> Result<&str> {
        self.region.as_deref().ok_or_else(|| self.missing("region"))
    }

    fn missing(&self, field: &'static str) -> ChartError {
        ChartError::MissingField {
            country: self.name.clone(),
            field,
        }
    }
}
