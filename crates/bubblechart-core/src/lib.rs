// crates/bubblechart-core/src/lib.rs

//! # bubblechart-core
//!
//! Aggregates a countries dataset along one selected dimension and lays the
//! result out as a force-directed bubble chart.
//!
//! ```rust
//! use bubblechart_core::prelude::*;
//!
//! let countries = vec![
//!     RawCountry::new("Aland", "ALA").with_population(5),
//!     RawCountry::new("Albania", "ALB").with_population(100),
//! ];
//! let chart = run_cycle(&countries, "population", &ChartConfig::default())?;
//! for item in &chart.items {
//!     println!("{} {} at ({:.0}, {:.0}) r={:.1}", item.name, item.value, item.x, item.y, item.radius);
//! }
//! # Ok::<(), ChartError>(())
//! ```

pub mod aggregate;
pub mod common;
pub mod config;
pub mod cycle;
pub mod error;
pub mod layout;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod scale;

// Re-exports
pub use crate::aggregate::aggregate;
pub use crate::common::DatasetStats;
pub use crate::config::{Canvas, ChartConfig, ScaleConfig};
pub use crate::cycle::{run_cycle, run_ticketed, Chart, ChartSession, CycleTicket};
pub use crate::error::{ChartError, Result};
pub use crate::layout::{layout, layout_with, LayoutConfig, LayoutReport, Simulation};
pub use crate::model::{
    AggregationMode, CountryMetric, Item, PositionedItem, RegionMetric, SizedItem,
};
pub use crate::raw::{CountriesRaw, LanguageRaw, RawCountry};
pub use crate::scale::{derive_scale, derive_scale_with, RadiusScale};
