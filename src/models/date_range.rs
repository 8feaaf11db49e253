//! Date range model.
//!
//! This module defines the DateRange struct used to scope current-period
//! metrics and historical rollups.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A half-open interval of instants: inclusive `from`, exclusive `to`.
///
/// Either bound may be absent, in which case the range is unbounded on that
/// side. A range with both bounds absent contains every instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DateRange {
    /// The inclusive lower bound, if any.
    #[serde(default)]
    pub from: Option<NaiveDateTime>,
    /// The exclusive upper bound, if any.
    #[serde(default)]
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    /// Creates a range bounded on both sides: `[from, to)`.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Creates a range bounded below only: `[from, ∞)`.
    pub fn starting_at(from: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Creates a range bounded above only: `(-∞, to)`.
    pub fn ending_at(to: NaiveDateTime) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Returns true if `instant` falls within the range.
    ///
    /// The lower bound is inclusive and the upper bound exclusive, so an
    /// instant exactly at `to` is outside the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_analytics::models::DateRange;
    /// use chrono::NaiveDateTime;
    ///
    /// let from = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let to = NaiveDateTime::parse_from_str("2024-02-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let range = DateRange::new(from, to);
    ///
    /// assert!(range.contains(from));
    /// assert!(!range.contains(to));
    /// ```
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        if let Some(from) = self.from
            && instant < from
        {
            return false;
        }
        if let Some(to) = self.to
            && instant >= to
        {
            return false;
        }
        true
    }

    /// Returns true if `from` and `to` are both present but reversed.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }
}
