//! Output statistic bundles produced by the metric reducers.
//!
//! All types in this module are immutable value objects: every field is
//! always present with a well-defined value, so presentation layers never
//! see a partially-populated bundle. Percentages are [`Decimal`] values in
//! the range [0, 100] and monetary amounts are [`Decimal`] dollars.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial statistics for a scoped set of shifts.
///
/// Revenue uses a markup model: labor cost multiplied by a fixed markup
/// factor approximates revenue in the absence of real invoicing data. It is
/// a modeling assumption, not an invoice total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStats {
    /// Approximated revenue for the scoped period (markup model).
    pub total_revenue: Decimal,
    /// Total scheduled labor cost: the sum of hours times hourly rate over
    /// non-canceled shifts in scope.
    pub labor_cost: Decimal,
    /// `(total_revenue - labor_cost) / total_revenue * 100`; 0 when revenue
    /// is 0.
    pub profit_margin_percent: Decimal,
    /// Revenue change versus the immediately preceding period of equal
    /// length; 0 when the prior period's revenue is 0.
    pub revenue_growth_percent: Decimal,
    /// Mean labor cost per shift in scope; 0 when the scope is empty.
    pub average_shift_cost: Decimal,
    /// Labor cost divided by total hours in scope; 0 when there are no
    /// hours.
    pub average_hourly_wage: Decimal,
    /// Projected earnings over a 30-day month, extrapolated from completed
    /// shifts (or from the current month's revenue-so-far when no shift has
    /// completed yet).
    pub projected_monthly_earnings: Decimal,
}

/// Completion and no-show statistics.
///
/// "Past" means the shift's end time is strictly before the reference
/// instant. A past shift that is neither completed nor canceled is a
/// no-show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliabilityStats {
    /// Number of shifts whose end time is in the past.
    pub past_shift_count: usize,
    /// Number of past shifts with completed status.
    pub completed_count: usize,
    /// Number of canceled shifts, past or future.
    pub canceled_count: usize,
    /// Number of past shifts that are neither completed nor canceled.
    pub no_show_count: usize,
    /// `completed / past * 100`; 100 when there are no past shifts, since
    /// no failures are possible yet.
    pub completion_rate_percent: Decimal,
    /// `no_show / past * 100`; 0 when there are no past shifts.
    pub no_show_rate_percent: Decimal,
}

/// Shift start counts bucketed by time of day.
///
/// Buckets are keyed on the start hour: morning [5, 12), afternoon [12, 17),
/// evening [17, 22), and night for everything else (wraps midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimeOfDayCounts {
    /// Shifts starting in [05:00, 12:00).
    pub morning: usize,
    /// Shifts starting in [12:00, 17:00).
    pub afternoon: usize,
    /// Shifts starting in [17:00, 22:00).
    pub evening: usize,
    /// Shifts starting in [22:00, 05:00).
    pub night: usize,
}

/// The sliding window of hours containing the most shift starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusiestWindow {
    /// The hour of day (0-23) the window opens at.
    pub start_hour: u32,
    /// The hour of day the window closes at, `(start + width) mod 24`.
    pub end_hour: u32,
    /// The number of shift starts falling inside the window.
    pub count: usize,
}

/// Distribution of shift starts across weekdays, hours, and durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionStats {
    /// Shift start counts per weekday, indexed Monday = 0 through
    /// Sunday = 6.
    pub counts_by_weekday: [usize; 7],
    /// Shift start counts bucketed by time of day.
    pub counts_by_time_of_day: TimeOfDayCounts,
    /// The window of hours containing the most shift starts; ties go to the
    /// lowest start hour.
    pub busiest_window: BusiestWindow,
    /// The mode of shift durations rounded to the nearest whole hour; ties
    /// go to the first value encountered in iteration order. 0 when there
    /// are no shifts.
    pub most_common_duration_hours: i64,
}

/// Employee utilization and tenure statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationStats {
    /// Total number of employees supplied to the engine.
    pub assigned_employee_count: usize,
    /// Number of distinct known employees appearing on at least one shift
    /// in scope.
    pub employees_with_at_least_one_shift: usize,
    /// `with_shifts / assigned * 100`; 0 when there are no employees.
    pub utilization_percent: Decimal,
    /// Mean whole-month tenure over employees with a hire date; employees
    /// without one are excluded from both sum and denominator. 0 when no
    /// employee has a hire date.
    pub average_tenure_months: Decimal,
}

/// One calendar month of rolled-up history.
///
/// The ordering of a series of points is explicit in the reducer call, and
/// each point carries its own period start so consumers never have to infer
/// direction from array order alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Stable sortable label for the month, e.g. "2024-03".
    pub period_label: String,
    /// The first instant of the month this point covers.
    pub period_start: NaiveDateTime,
    /// Total shift hours started in the month.
    pub total_hours: Decimal,
    /// Total earnings (hours times employee rate) for shifts started in the
    /// month.
    pub total_earnings: Decimal,
    /// Number of distinct known employees with a shift in the month.
    pub distinct_employee_count: usize,
}

/// The composite statistic bundle assembled by the analytics facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsBundle {
    /// Financial statistics for the scoped period.
    pub financial: FinancialStats,
    /// Completion and no-show statistics.
    pub reliability: ReliabilityStats,
    /// Weekday, time-of-day, and duration distribution.
    pub distribution: DistributionStats,
    /// Employee utilization and tenure.
    pub utilization: UtilizationStats,
    /// Trailing per-month rollups, newest first.
    pub history: Vec<HistoricalPoint>,
}
