//! Core data models for the Workforce Analytics Engine.
//!
//! This module contains the input records (shifts, employees, locations),
//! the scoping range, and the output statistic bundles.

mod date_range;
mod employee;
mod insights;
mod location;
mod shift;

pub use date_range::DateRange;
pub use employee::Employee;
pub use insights::{
    BusiestWindow, DistributionStats, FinancialStats, HistoricalPoint, InsightsBundle,
    ReliabilityStats, TimeOfDayCounts, UtilizationStats,
};
pub use location::Location;
pub use shift::{Shift, ShiftStatus};
