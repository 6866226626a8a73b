// crates/bubblechart-core/src/scale.rs
use crate::config::ScaleConfig;
use crate::model::{Item, SizedItem};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_RADIUS: f64 = 10.0;
pub const DEFAULT_MAX_RADIUS: f64 = 100.0;

/// Square-root value → radius mapping.
///
/// Maps the domain `[0, max_value]` onto `[min_radius, max_radius]` through
/// `√v`, so bubble *area* grows in proportion to value. Inputs outside the
/// domain are clamped. With `max_value == 0` every value maps to
/// `min_radius`.
///
/// ```rust
/// use bubblechart_core::{derive_scale, Item};
///
/// let items = [Item::new("ALA", 5), Item::new("ALB", 100)];
/// let scale = derive_scale(&items);
/// assert_eq!(scale.radius(0.0), 10.0);
/// assert_eq!(scale.radius(100.0), 100.0);
/// assert!((scale.radius(5.0) - 30.12).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub max_value: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RadiusScale {
    pub fn new(max_value: f64, min_radius: f64, max_radius: f64) -> Self {
        Self {
            max_value: max_value.max(0.0),
            min_radius,
            max_radius,
        }
    }

    pub fn radius(&self, value: f64) -> f64 {
        if self.max_value <= 0.0 || value.is_nan() {
            return self.min_radius;
        }
        let v = value.clamp(0.0, self.max_value);
        let t = (v / self.max_value).sqrt();
        self.min_radius + (self.max_radius - self.min_radius) * t
    }

    pub fn is_constant(&self) -> bool {
        self.max_value <= 0.0
    }

    /// Attach a radius to every item, preserving order.
    pub fn size(&self, items: Vec<Item>) -> Vec<SizedItem> {
        items
            .into_iter()
            .map(|item| SizedItem {
                radius: self.radius(item.value as f64),
                item,
            })
            .collect()
    }
}

/// Derive the default 10..100 scale from the items' value range.
pub fn derive_scale(items: &[Item]) -> RadiusScale {
    derive_scale_with(items, &ScaleConfig::default())
}

pub fn derive_scale_with(items: &[Item], config: &ScaleConfig) -> RadiusScale {
    let max_value = items.iter().map(|i| i.value).max().unwrap_or(0);
    RadiusScale::new(max_value as f64, config.min_radius, config.max_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[u64]) -> Vec<Item> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Item::new(format!("I{i}"), *v))
            .collect()
    }

    #[test]
    fn endpoints_hit_range() {
        let scale = derive_scale(&items(&[3, 49, 7]));
        assert_eq!(scale.max_value, 49.0);
        assert_eq!(scale.radius(0.0), DEFAULT_MIN_RADIUS);
        assert_eq!(scale.radius(49.0), DEFAULT_MAX_RADIUS);
        let expected = 10.0 + 90.0 * (7.0f64 / 49.0).sqrt();
        assert!((scale.radius(7.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn monotonic_over_domain() {
        let scale = derive_scale(&items(&[1_000_000]));
        let mut prev = scale.radius(0.0);
        for step in 1..=1000 {
            let r = scale.radius(step as f64 * 1000.0);
            assert!(r >= prev, "radius decreased at step {step}");
            prev = r;
        }
    }

    #[test]
    fn clamps_outside_domain() {
        let scale = derive_scale(&items(&[100]));
        assert_eq!(scale.radius(-50.0), DEFAULT_MIN_RADIUS);
        assert_eq!(scale.radius(10_000.0), DEFAULT_MAX_RADIUS);
        assert_eq!(scale.radius(f64::INFINITY), DEFAULT_MAX_RADIUS);
    }

    #[test]
    fn degenerate_inputs_are_constant() {
        for scale in [derive_scale(&[]), derive_scale(&items(&[0, 0]))] {
            assert!(scale.is_constant());
            assert_eq!(scale.radius(0.0), DEFAULT_MIN_RADIUS);
            assert_eq!(scale.radius(5.0), DEFAULT_MIN_RADIUS);
        }
    }

    #[test]
    fn custom_range() {
        let cfg = ScaleConfig {
            min_radius: 2.0,
            max_radius: 4.0,
        };
        let scale = derive_scale_with(&items(&[16, 4]), &cfg);
        assert_eq!(scale.radius(16.0), 4.0);
        assert_eq!(scale.radius(4.0), 3.0);
    }
}
