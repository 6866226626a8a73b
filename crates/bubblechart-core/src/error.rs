// crates/bubblechart-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a dataset or running a chart cycle.
///
/// Every failure is scoped to a single cycle; nothing here leaves state
/// behind that could affect the next one.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A record lacks a field the selected aggregation mode consumes.
    #[error("country '{country}' is missing field '{field}'")]
    MissingField {
        country: String,
        field: &'static str,
    },

    /// The dataset file (or URL target) could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not a JSON array of country records.
    #[cfg(feature = "json")]
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A newer cycle started while this one was still laying out.
    #[error("cycle {ticket} superseded by cycle {current}")]
    Superseded { ticket: u64, current: u64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
