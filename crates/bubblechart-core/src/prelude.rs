//! bubblechart prelude: bring common types and functions into scope for demos.

#![allow(unused_imports)]

pub use crate::aggregate::aggregate;
pub use crate::common::DatasetStats;
pub use crate::config::{Canvas, ChartConfig, ScaleConfig};
pub use crate::cycle::{run_cycle, Chart, ChartSession, CycleTicket};
pub use crate::error::{ChartError, Result};
pub use crate::layout::{LayoutConfig, LayoutReport};
#[cfg(feature = "json")]
pub use crate::loader::{load_from_path, load_from_str, DATA_URL};
pub use crate::model::{AggregationMode, Item, PositionedItem};
pub use crate::raw::RawCountry;
pub use crate::scale::derive_scale;
