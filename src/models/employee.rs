//! Employee model.
//!
//! This module defines the Employee struct for representing workers in the
//! analytics engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee who can be assigned to shifts.
///
/// Both the hourly rate and the hire date are optional: an employee without
/// a rate contributes zero cost and earnings but still counts toward
/// utilization, and an employee without a hire date is excluded from tenure
/// averages entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Human-readable name for display purposes.
    pub display_name: String,
    /// The employee's hourly rate, if one has been set. Non-negative by
    /// policy; negative values are clamped to zero at cost time.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// The date the employee was hired, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}
