// crates/bubblechart-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Metric read from each country in per-country mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountryMetric {
    Population,
    Borders,
    Timezones,
    Languages,
    /// Any token we don't know. Every item gets value 0.
    Unrecognized,
}

/// What a region item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionMetric {
    /// Distinct country names in the region.
    Countries,
    /// Distinct timezone strings across the region's countries.
    Timezones,
}

/// The grouping/metric dimension for one aggregation run.
///
/// Built from the selection token with [`AggregationMode::from_token`]:
///
/// ```rust
/// use bubblechart_core::{AggregationMode, CountryMetric, RegionMetric};
///
/// assert_eq!(
///     AggregationMode::from_token("borders"),
///     AggregationMode::Country(CountryMetric::Borders)
/// );
/// assert_eq!(
///     AggregationMode::from_token("regionCountries"),
///     AggregationMode::Region(RegionMetric::Countries)
/// );
/// // Any other token mentioning "region" counts timezones.
/// assert_eq!(
///     AggregationMode::from_token("regionTimezones"),
///     AggregationMode::Region(RegionMetric::Timezones)
/// );
/// assert_eq!(
///     AggregationMode::from_token("gdp"),
///     AggregationMode::Country(CountryMetric::Unrecognized)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationMode {
    Country(CountryMetric),
    Region(RegionMetric),
}

impl AggregationMode {
    /// Tokens understood by [`AggregationMode::from_token`], in UI order.
    pub const TOKENS: [&'static str; 6] = [
        "population",
        "borders",
        "timezones",
        "languages",
        "regionCountries",
        "regionTimezones",
    ];

    /// Resolve a selection token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Self {
        if token.contains("region") {
            return if token == "regionCountries" {
                Self::Region(RegionMetric::Countries)
            } else {
                Self::Region(RegionMetric::Timezones)
            };
        }
        let metric = match token {
            "population" => CountryMetric::Population,
            "borders" => CountryMetric::Borders,
            "timezones" => CountryMetric::Timezones,
            "languages" => CountryMetric::Languages,
            _ => CountryMetric::Unrecognized,
        };
        Self::Country(metric)
    }

    pub fn is_region(&self) -> bool {
        matches!(self, Self::Region(_))
    }

    /// Canonical token, or `None` for an unrecognized metric.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::Country(CountryMetric::Population) => Some("population"),
            Self::Country(CountryMetric::Borders) => Some("borders"),
            Self::Country(CountryMetric::Timezones) => Some("timezones"),
            Self::Country(CountryMetric::Languages) => Some("languages"),
            Self::Country(CountryMetric::Unrecognized) => None,
            Self::Region(RegionMetric::Countries) => Some("regionCountries"),
            Self::Region(RegionMetric::Timezones) => Some("regionTimezones"),
        }
    }

    /// Human-readable label for the value column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Country(CountryMetric::Population) => "Population",
            Self::Country(CountryMetric::Borders) => "Number of borders",
            Self::Country(CountryMetric::Timezones) => "Number of timezones",
            Self::Country(CountryMetric::Languages) => "Number of languages",
            Self::Country(CountryMetric::Unrecognized) => "Value",
            Self::Region(RegionMetric::Countries) => "Countries in region",
            Self::Region(RegionMetric::Timezones) => "Timezones in region",
        }
    }
}

impl FromStr for AggregationMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("unrecognized"))
    }
}

/// One aggregated entry: a country (keyed by alpha-3 code) or a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// An [`Item`] paired with the radius its value maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedItem {
    #[serde(flatten)]
    pub item: Item,
    pub radius: f64,
}

/// An [`Item`] with its radius and settled canvas position.
///
/// This is what the presentation side consumes; fields are emitted
/// verbatim and in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedItem {
    pub name: String,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

impl PositionedItem {
    pub fn distance_to(&self, other: &PositionedItem) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Amount by which this bubble and `other` intersect (0 when apart).
    pub fn overlap_with(&self, other: &PositionedItem) -> f64 {
        (self.radius + other.radius - self.distance_to(other)).max(0.0)
    }
}
