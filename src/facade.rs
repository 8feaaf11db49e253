//! The analytics facade: scope, index, reduce, assemble.
//!
//! This is the engine's only public entry point for callers. It validates
//! arguments once, filters the shift array to the requested location, builds
//! one shared [`RecordIndex`], and invokes each metric reducer exactly once.
//! Reducers never re-filter by location internally, which keeps them
//! reusable at any scope.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::{EngineError, EngineResult};
use crate::index::RecordIndex;
use crate::models::{DateRange, Employee, InsightsBundle, Location, Shift};
use crate::reducers::{
    RollupOrder, compute_distribution, compute_financial, compute_history, compute_reliability,
    compute_utilization,
};

/// Computes the composite insights bundle for a location scope using the
/// default configuration.
///
/// `location_id` of `None` computes org-wide statistics over the whole
/// shift array; a concrete id keeps only shifts assigned to that location
/// (shifts without a location are excluded from a concrete scope). `range`
/// scopes the financial reducer; when absent the current calendar month is
/// used.
///
/// The engine never reads the system clock: `now` is the single reference
/// instant for "past", "current month", and tenure arithmetic, which makes
/// repeated calls with identical inputs produce identical output.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `range` has both bounds
/// present but reversed. Malformed data (negative durations, unknown ids,
/// missing rates) is never an error; reducers degrade to their documented
/// neutral defaults, and every field of the returned bundle is always
/// populated.
///
/// # Examples
///
/// ```
/// use shift_analytics::facade::compute_location_insights;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let now = NaiveDateTime::parse_from_str("2024-06-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let bundle = compute_location_insights(&[], &[], &[], None, now, None).unwrap();
///
/// assert_eq!(bundle.financial.total_revenue, Decimal::ZERO);
/// assert_eq!(bundle.reliability.completion_rate_percent, Decimal::new(100, 0));
/// assert_eq!(bundle.utilization.utilization_percent, Decimal::ZERO);
/// assert_eq!(bundle.distribution.busiest_window.count, 0);
/// ```
pub fn compute_location_insights(
    shifts: &[Shift],
    employees: &[Employee],
    locations: &[Location],
    location_id: Option<&str>,
    now: NaiveDateTime,
    range: Option<&DateRange>,
) -> EngineResult<InsightsBundle> {
    compute_location_insights_with_config(
        shifts,
        employees,
        locations,
        location_id,
        now,
        range,
        &AnalyticsConfig::default(),
    )
}

/// Computes the composite insights bundle with explicit configuration.
///
/// Identical to [`compute_location_insights`] but with caller-supplied
/// tunables. The configuration is validated once at entry; see
/// [`AnalyticsConfig::validate`].
#[allow(clippy::too_many_arguments)]
pub fn compute_location_insights_with_config(
    shifts: &[Shift],
    employees: &[Employee],
    locations: &[Location],
    location_id: Option<&str>,
    now: NaiveDateTime,
    range: Option<&DateRange>,
    config: &AnalyticsConfig,
) -> EngineResult<InsightsBundle> {
    config.validate()?;
    if let Some(range) = range
        && let (Some(from), Some(to)) = (range.from, range.to)
        && from > to
    {
        return Err(EngineError::InvalidRange { from, to });
    }

    let scoped: Vec<&Shift> = shifts
        .iter()
        .filter(|shift| match location_id {
            Some(id) => shift.location_id.as_deref() == Some(id),
            None => true,
        })
        .collect();

    debug!(
        total_shifts = shifts.len(),
        scoped_shifts = scoped.len(),
        employees = employees.len(),
        location = location_id.unwrap_or("<org-wide>"),
        "Computing location insights"
    );

    let index = RecordIndex::build(&scoped, employees, locations);

    Ok(InsightsBundle {
        financial: compute_financial(
            &scoped,
            &index,
            now,
            range,
            config.markup_factor,
            config.projection_days,
        ),
        reliability: compute_reliability(&scoped, now),
        distribution: compute_distribution(&scoped, config.busiest_window_hours),
        utilization: compute_utilization(&scoped, &index, now),
        history: compute_history(
            &scoped,
            &index,
            now,
            config.trailing_months,
            RollupOrder::NewestFirst,
        ),
    })
}
