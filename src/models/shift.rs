//! Shift model and related types.
//!
//! This module defines the Shift struct and ShiftStatus enum for
//! representing scheduled work intervals in the analytics engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time::duration_hours;

/// Represents the lifecycle status of a shift.
///
/// A shift whose status is absent (or still [`ShiftStatus::Scheduled`]) after
/// its end time has passed is treated as an implied no-show by the
/// reliability reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift is on the roster but has not been worked yet.
    Scheduled,
    /// The shift was worked to completion.
    Completed,
    /// The shift was called off before being worked.
    Canceled,
}

/// Represents a scheduled work interval, assignable to one employee at one
/// location.
///
/// Both references are optional: an unassigned or location-less shift is
/// still counted in totals, but is excluded from any employee- or
/// location-keyed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift. Logically after `start_time`; violations
    /// are tolerated and read as zero duration.
    pub end_time: NaiveDateTime,
    /// The lifecycle status, if one has been recorded.
    #[serde(default)]
    pub status: Option<ShiftStatus>,
    /// The location this shift belongs to, if any.
    #[serde(default)]
    pub location_id: Option<String>,
    /// The employee assigned to this shift, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl Shift {
    /// Returns the duration of the shift in hours.
    ///
    /// Never negative: a shift whose end time is at or before its start time
    /// reads as zero hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_analytics::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     start_time: NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2024-01-01 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     status: None,
    ///     location_id: None,
    ///     employee_id: None,
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(80, 1)); // 8.0 hours
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        duration_hours(self.start_time, self.end_time)
    }

    /// Returns true if the shift has been canceled.
    pub fn is_canceled(&self) -> bool {
        self.status == Some(ShiftStatus::Canceled)
    }

    /// Returns true if the shift was worked to completion.
    pub fn is_completed(&self) -> bool {
        self.status == Some(ShiftStatus::Completed)
    }

    /// Returns true if the shift's end time is strictly before `now`.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.end_time < now
    }
}
