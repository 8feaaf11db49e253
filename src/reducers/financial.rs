//! Financial reduction: labor cost, markup-model revenue, margins, growth,
//! and monthly projection.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::index::RecordIndex;
use crate::models::{DateRange, FinancialStats, Shift};
use crate::time::{cost, days_between, days_in_month, month_start};

/// Computes financial statistics for a shift slice.
///
/// Shifts are scoped to `range` when one is supplied, otherwise to the
/// current calendar month, and canceled shifts are excluded throughout.
/// Labor cost sums hours times the rate resolved through `index`.
///
/// Revenue uses a markup model: `labor_cost * markup_factor`, which is the
/// average hourly wage times the markup times total hours. "Revenue is a
/// multiple of labor" is a modeling assumption, not an invoice total.
///
/// Revenue growth compares the scoped period against the immediately
/// preceding period of equal length; it is 0 when the prior period had no
/// revenue, and 0 for ranges unbounded on either side (no prior period
/// exists).
///
/// The monthly projection extrapolates a daily average over completed
/// shifts to `projection_days`; with no completed shifts it falls back to
/// stretching the current month's revenue-so-far over the full month
/// length, with the elapsed-day count floored at 1.
///
/// Every output field is 0 on empty input; nothing here panics or divides
/// by zero.
pub fn compute_financial(
    shifts: &[&Shift],
    index: &RecordIndex<'_>,
    now: NaiveDateTime,
    range: Option<&DateRange>,
    markup_factor: Decimal,
    projection_days: u32,
) -> FinancialStats {
    let scope = range.copied().unwrap_or_else(|| current_month_range(now));
    let current = fold_scope(shifts, index, &scope);

    let total_revenue = current.labor_cost * markup_factor;

    let profit_margin_percent = if total_revenue.is_zero() {
        Decimal::ZERO
    } else {
        (total_revenue - current.labor_cost) / total_revenue * Decimal::ONE_HUNDRED
    };

    let revenue_growth_percent = match (scope.from, scope.to) {
        (Some(from), Some(to)) => {
            let prior = DateRange::new(from - (to - from), from);
            let prior_revenue = fold_scope(shifts, index, &prior).labor_cost * markup_factor;
            if prior_revenue.is_zero() {
                Decimal::ZERO
            } else {
                (total_revenue - prior_revenue) / prior_revenue * Decimal::ONE_HUNDRED
            }
        }
        _ => Decimal::ZERO,
    };

    let average_shift_cost = if current.shift_count == 0 {
        Decimal::ZERO
    } else {
        current.labor_cost / Decimal::from(current.shift_count)
    };

    let average_hourly_wage = if current.total_hours.is_zero() {
        Decimal::ZERO
    } else {
        current.labor_cost / current.total_hours
    };

    let projected_monthly_earnings =
        project_monthly_earnings(shifts, index, now, markup_factor, projection_days);

    FinancialStats {
        total_revenue,
        labor_cost: current.labor_cost,
        profit_margin_percent,
        revenue_growth_percent,
        average_shift_cost,
        average_hourly_wage,
        projected_monthly_earnings,
    }
}

/// Accumulated cost, hours, and count over one scoped pass.
struct ScopeTotals {
    labor_cost: Decimal,
    total_hours: Decimal,
    shift_count: usize,
}

fn fold_scope(shifts: &[&Shift], index: &RecordIndex<'_>, range: &DateRange) -> ScopeTotals {
    let mut totals = ScopeTotals {
        labor_cost: Decimal::ZERO,
        total_hours: Decimal::ZERO,
        shift_count: 0,
    };

    for shift in shifts {
        if shift.is_canceled() || !range.contains(shift.start_time) {
            continue;
        }
        totals.labor_cost += cost(shift.start_time, shift.end_time, index.rate_for(shift));
        totals.total_hours += shift.duration_hours();
        totals.shift_count += 1;
    }

    totals
}

fn current_month_range(now: NaiveDateTime) -> DateRange {
    DateRange::new(month_start(now), crate::time::add_months(now, 1))
}

fn project_monthly_earnings(
    shifts: &[&Shift],
    index: &RecordIndex<'_>,
    now: NaiveDateTime,
    markup_factor: Decimal,
    projection_days: u32,
) -> Decimal {
    let mut completed_earnings = Decimal::ZERO;
    let mut earliest_start: Option<NaiveDateTime> = None;

    for shift in shifts {
        if !shift.is_completed() {
            continue;
        }
        completed_earnings += cost(shift.start_time, shift.end_time, index.rate_for(shift));
        earliest_start = Some(match earliest_start {
            Some(current) => current.min(shift.start_time),
            None => shift.start_time,
        });
    }

    match earliest_start {
        Some(earliest) => {
            let days = days_between(earliest, now).max(1);
            completed_earnings / Decimal::from(days) * Decimal::from(projection_days)
        }
        None => {
            // Nothing has completed yet: stretch the current month's
            // revenue-so-far over the full month length.
            let so_far = DateRange::new(month_start(now), now);
            let revenue_so_far = fold_scope(shifts, index, &so_far).labor_cost * markup_factor;
            let days_elapsed = Decimal::from(i64::from(now.day()).max(1));
            revenue_so_far * Decimal::from(days_in_month(now)) / days_elapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, ShiftStatus};
    use std::str::FromStr;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn now() -> NaiveDateTime {
        make_datetime("2024-06-15 12:00:00")
    }

    fn make_employee(id: &str, rate: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            display_name: format!("Employee {}", id),
            hourly_rate: rate.map(dec),
            hire_date: None,
        }
    }

    fn make_shift(
        id: &str,
        start: &str,
        end: &str,
        status: Option<ShiftStatus>,
        employee_id: Option<&str>,
    ) -> Shift {
        Shift {
            id: id.to_string(),
            start_time: make_datetime(start),
            end_time: make_datetime(end),
            status,
            location_id: None,
            employee_id: employee_id.map(str::to_string),
        }
    }

    fn compute(shifts: &[Shift], employees: &[Employee]) -> FinancialStats {
        let refs: Vec<&Shift> = shifts.iter().collect();
        let index = RecordIndex::build(&refs, employees, &[]);
        compute_financial(&refs, &index, now(), None, dec("3"), 30)
    }

    /// FN-001: empty input yields all-zero stats
    #[test]
    fn test_empty_input_all_zero() {
        let stats = compute(&[], &[]);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.labor_cost, Decimal::ZERO);
        assert_eq!(stats.profit_margin_percent, Decimal::ZERO);
        assert_eq!(stats.revenue_growth_percent, Decimal::ZERO);
        assert_eq!(stats.average_shift_cost, Decimal::ZERO);
        assert_eq!(stats.average_hourly_wage, Decimal::ZERO);
        assert_eq!(stats.projected_monthly_earnings, Decimal::ZERO);
    }

    /// FN-002: one 8-hour shift at $20/hr costs $160 and bills $480
    #[test]
    fn test_single_shift_cost_and_markup_revenue() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-10 09:00:00",
            "2024-06-10 17:00:00",
            Some(ShiftStatus::Completed),
            Some("emp_001"),
        )];
        let stats = compute(&shifts, &employees);

        assert_eq!(stats.labor_cost, dec("160.00"));
        assert_eq!(stats.total_revenue, dec("480.00"));
        assert_eq!(stats.average_shift_cost, dec("160.00"));
        assert_eq!(stats.average_hourly_wage, dec("20.00"));
        // (480 - 160) / 480 * 100 = 66.67%
        assert_eq!(stats.profit_margin_percent.round_dp(2), dec("66.67"));
    }

    /// FN-003: canceled shifts are excluded from cost and revenue
    #[test]
    fn test_canceled_shifts_excluded() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![
            make_shift(
                "shift_001",
                "2024-06-10 09:00:00",
                "2024-06-10 17:00:00",
                Some(ShiftStatus::Completed),
                Some("emp_001"),
            ),
            make_shift(
                "shift_002",
                "2024-06-11 09:00:00",
                "2024-06-11 17:00:00",
                Some(ShiftStatus::Canceled),
                Some("emp_001"),
            ),
        ];
        let stats = compute(&shifts, &employees);
        assert_eq!(stats.labor_cost, dec("160.00"));
    }

    /// FN-004: shifts outside the scoped month are excluded
    #[test]
    fn test_out_of_scope_shifts_excluded() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![
            make_shift(
                "shift_001",
                "2024-06-10 09:00:00",
                "2024-06-10 17:00:00",
                None,
                Some("emp_001"),
            ),
            make_shift(
                "shift_002",
                "2024-05-10 09:00:00",
                "2024-05-10 17:00:00",
                None,
                Some("emp_001"),
            ),
        ];
        let stats = compute(&shifts, &employees);
        assert_eq!(stats.labor_cost, dec("160.00"));
    }

    /// FN-005: a rateless employee contributes hours but zero cost
    #[test]
    fn test_rateless_employee_zero_cost() {
        let employees = vec![
            make_employee("emp_001", Some("20.00")),
            make_employee("emp_002", None),
        ];
        let shifts = vec![
            make_shift(
                "shift_001",
                "2024-06-10 09:00:00",
                "2024-06-10 17:00:00",
                None,
                Some("emp_001"),
            ),
            make_shift(
                "shift_002",
                "2024-06-11 09:00:00",
                "2024-06-11 17:00:00",
                None,
                Some("emp_002"),
            ),
        ];
        let stats = compute(&shifts, &employees);
        assert_eq!(stats.labor_cost, dec("160.00"));
        // Two shifts in scope, so the average halves.
        assert_eq!(stats.average_shift_cost, dec("80.00"));
        // 16 hours worked for $160: the blended wage is $10/hr.
        assert_eq!(stats.average_hourly_wage, dec("10.00"));
    }

    /// FN-006: revenue growth against the prior equal-length period
    #[test]
    fn test_revenue_growth_against_prior_period() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let range = DateRange::new(
            make_datetime("2024-06-01 00:00:00"),
            make_datetime("2024-06-11 00:00:00"),
        );
        let shifts = vec![
            // Current period: 8 hours.
            make_shift(
                "shift_001",
                "2024-06-05 09:00:00",
                "2024-06-05 17:00:00",
                None,
                Some("emp_001"),
            ),
            // Prior period (May 22 - Jun 1): 4 hours.
            make_shift(
                "shift_002",
                "2024-05-25 09:00:00",
                "2024-05-25 13:00:00",
                None,
                Some("emp_001"),
            ),
        ];
        let refs: Vec<&Shift> = shifts.iter().collect();
        let index = RecordIndex::build(&refs, &employees, &[]);
        let stats = compute_financial(&refs, &index, now(), Some(&range), dec("3"), 30);

        // Revenue doubled from 240 to 480: +100%.
        assert_eq!(stats.revenue_growth_percent, dec("100"));
    }

    /// FN-007: zero-revenue prior period pins growth to 0
    #[test]
    fn test_revenue_growth_zero_prior_period() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-10 09:00:00",
            "2024-06-10 17:00:00",
            None,
            Some("emp_001"),
        )];
        let stats = compute(&shifts, &employees);
        assert_eq!(stats.revenue_growth_percent, Decimal::ZERO);
    }

    /// FN-008: projection from completed shifts uses the earliest start
    #[test]
    fn test_projection_from_completed_shifts() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-01 09:00:00",
            "2024-06-01 17:00:00",
            Some(ShiftStatus::Completed),
            Some("emp_001"),
        )];
        let stats = compute(&shifts, &employees);
        // $160 over 14 whole days, projected to 30 days: 342.86.
        assert_eq!(stats.projected_monthly_earnings.round_dp(2), dec("342.86"));
    }

    /// FN-009: projection floors the day span at 1
    #[test]
    fn test_projection_day_span_floored() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-15 08:00:00",
            "2024-06-15 12:00:00",
            Some(ShiftStatus::Completed),
            Some("emp_001"),
        )];
        let stats = compute(&shifts, &employees);
        // Completed this morning: $80 over a floored 1-day span.
        assert_eq!(stats.projected_monthly_earnings, dec("2400.00"));
    }

    /// FN-010: with no completed shifts the projection extrapolates the
    /// current month's revenue-so-far
    #[test]
    fn test_projection_fallback_extrapolates_month() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-10 09:00:00",
            "2024-06-10 17:00:00",
            Some(ShiftStatus::Scheduled),
            Some("emp_001"),
        )];
        let stats = compute(&shifts, &employees);
        // Revenue so far is 480; June has 30 days and 15 have elapsed.
        assert_eq!(stats.projected_monthly_earnings, dec("960.00"));
    }

    /// FN-011: adding a completed, positive-rate shift strictly increases
    /// cost and revenue
    #[test]
    fn test_monotonicity_under_added_shift() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let mut shifts = vec![make_shift(
            "shift_001",
            "2024-06-10 09:00:00",
            "2024-06-10 17:00:00",
            Some(ShiftStatus::Completed),
            Some("emp_001"),
        )];
        let before = compute(&shifts, &employees);

        shifts.push(make_shift(
            "shift_002",
            "2024-06-11 09:00:00",
            "2024-06-11 13:00:00",
            Some(ShiftStatus::Completed),
            Some("emp_001"),
        ));
        let after = compute(&shifts, &employees);

        assert!(after.labor_cost > before.labor_cost);
        assert!(after.total_revenue > before.total_revenue);
    }

    /// FN-012: unbounded custom ranges report zero growth
    #[test]
    fn test_unbounded_range_growth_is_zero() {
        let employees = vec![make_employee("emp_001", Some("20.00"))];
        let shifts = vec![make_shift(
            "shift_001",
            "2024-06-10 09:00:00",
            "2024-06-10 17:00:00",
            None,
            Some("emp_001"),
        )];
        let refs: Vec<&Shift> = shifts.iter().collect();
        let index = RecordIndex::build(&refs, &employees, &[]);

        let open_ended = DateRange::starting_at(make_datetime("2024-01-01 00:00:00"));
        let stats = compute_financial(&refs, &index, now(), Some(&open_ended), dec("3"), 30);
        assert_eq!(stats.revenue_growth_percent, Decimal::ZERO);
        assert_eq!(stats.labor_cost, dec("160.00"));
    }
}
