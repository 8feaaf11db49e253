//! Configuration types for the analytics engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tunable parameters for the metric reducers.
///
/// The defaults reproduce the canonical metric definitions: a 3x markup on
/// labor cost to approximate revenue, an 8-hour busiest window, a 6-month
/// historical rollup, and a 30-day earnings projection. All fields are
/// optional in the YAML representation and fall back to these defaults.
///
/// # Example
///
/// ```
/// use shift_analytics::config::AnalyticsConfig;
/// use rust_decimal::Decimal;
///
/// let config = AnalyticsConfig::default();
/// assert_eq!(config.markup_factor, Decimal::new(3, 0));
/// assert_eq!(config.busiest_window_hours, 8);
/// assert_eq!(config.trailing_months, 6);
/// assert_eq!(config.projection_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Multiplier applied to labor cost to approximate revenue.
    #[serde(default = "default_markup_factor")]
    pub markup_factor: Decimal,
    /// Width of the busiest-window scan, in hours.
    #[serde(default = "default_busiest_window_hours")]
    pub busiest_window_hours: u32,
    /// Number of calendar months in the historical rollup, including the
    /// current partial month.
    #[serde(default = "default_trailing_months")]
    pub trailing_months: u32,
    /// Number of days the monthly earnings projection extrapolates to.
    #[serde(default = "default_projection_days")]
    pub projection_days: u32,
}

fn default_markup_factor() -> Decimal {
    Decimal::new(3, 0)
}

fn default_busiest_window_hours() -> u32 {
    8
}

fn default_trailing_months() -> u32 {
    6
}

fn default_projection_days() -> u32 {
    30
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            markup_factor: default_markup_factor(),
            busiest_window_hours: default_busiest_window_hours(),
            trailing_months: default_trailing_months(),
            projection_days: default_projection_days(),
        }
    }
}

impl AnalyticsConfig {
    /// Checks that every parameter is within its allowed bounds.
    ///
    /// The facade runs this once per call before any reducer executes, so
    /// reducers can assume a valid configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.markup_factor < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("markup_factor must be non-negative, got {}", self.markup_factor),
            });
        }
        if self.busiest_window_hours < 1 || self.busiest_window_hours > 24 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "busiest_window_hours must be between 1 and 24, got {}",
                    self.busiest_window_hours
                ),
            });
        }
        if self.trailing_months < 1 {
            return Err(EngineError::InvalidConfig {
                message: "trailing_months must be at least 1".to_string(),
            });
        }
        if self.projection_days < 1 {
            return Err(EngineError::InvalidConfig {
                message: "projection_days must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
