// crates/bubblechart-core/src/config.rs
use crate::error::{ChartError, Result};
use crate::layout::LayoutConfig;
use crate::scale::{DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS};
use serde::{Deserialize, Serialize};

/// Drawing surface the layout centers on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 2000.0,
        }
    }
}

impl Canvas {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Radius range for [`RadiusScale`](crate::RadiusScale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

/// Everything one chart cycle needs besides the data and the selection.
///
/// Every field has a default, so a TOML file only has to name what it
/// changes:
///
/// ```toml
/// [canvas]
/// width = 800
///
/// [layout]
/// max_steps = 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: Canvas,
    pub scale: ScaleConfig,
    pub layout: LayoutConfig,
}

impl ChartConfig {
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas { width, height };
        self
    }

    /// Reject settings the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let Canvas { width, height } = self.canvas;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ChartError::InvalidConfig(format!(
                "canvas must be positive and finite, got {width}x{height}"
            )));
        }
        let ScaleConfig {
            min_radius,
            max_radius,
        } = self.scale;
        if !(min_radius > 0.0) || !max_radius.is_finite() || min_radius > max_radius {
            return Err(ChartError::InvalidConfig(format!(
                "radius range must satisfy 0 < min <= max, got {min_radius}..{max_radius}"
            )));
        }
        self.layout.validate()
    }
}
