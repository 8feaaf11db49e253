//! Time-bucketed historical rollup reduction.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::index::RecordIndex;
use crate::models::{HistoricalPoint, Shift};
use crate::time::{Granularity, add_months, bucket_key, cost};

/// The requested ordering of a historical series.
///
/// Ordering is an explicit argument rather than a convention: every
/// [`HistoricalPoint`] also carries its own period start, so consumers can
/// verify direction instead of inferring it from array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupOrder {
    /// The current (partial) month first, oldest month last.
    NewestFirst,
    /// The oldest month first, current (partial) month last.
    OldestFirst,
}

/// Rolls shifts up into one point per trailing calendar month.
///
/// The series covers `months` calendar months ending with the current,
/// partial month. A shift belongs to the month containing its start
/// instant; each point sums hours and earnings (hours times the rate
/// resolved through `index`) and counts distinct resolved employees.
///
/// Months with no shifts still produce a point with zeroed totals, so the
/// series length is always `months`.
pub fn compute_history(
    shifts: &[&Shift],
    index: &RecordIndex<'_>,
    now: NaiveDateTime,
    months: u32,
    order: RollupOrder,
) -> Vec<HistoricalPoint> {
    let mut points = Vec::with_capacity(months as usize);

    for offset in 0..months {
        let period_start = add_months(now, -(offset as i32));
        let period_end = add_months(period_start, 1);

        let mut total_hours = Decimal::ZERO;
        let mut total_earnings = Decimal::ZERO;
        let mut employees: HashSet<&str> = HashSet::new();

        for shift in shifts {
            if shift.start_time < period_start || shift.start_time >= period_end {
                continue;
            }
            total_hours += shift.duration_hours();
            total_earnings += cost(shift.start_time, shift.end_time, index.rate_for(shift));
            if let Some(employee) = index.employee_for(shift) {
                employees.insert(employee.id.as_str());
            }
        }

        points.push(HistoricalPoint {
            period_label: bucket_key(period_start, Granularity::Month),
            period_start,
            total_hours,
            total_earnings,
            distinct_employee_count: employees.len(),
        });
    }

    if order == RollupOrder::OldestFirst {
        points.reverse();
    }
    points
}
