//! Employee utilization and tenure reduction.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::index::RecordIndex;
use crate::models::{Shift, UtilizationStats};
use crate::time::months_between;

/// Computes utilization and tenure statistics.
///
/// Utilization is the share of known employees appearing on at least one
/// shift in the slice. Shifts referencing unknown employee ids are skipped
/// here (they stay in the totals other reducers produce, but an id the
/// index cannot resolve is not a utilized employee). With no employees the
/// percentage is 0.
///
/// Average tenure is the mean whole-month span from hire date to `now`,
/// taken over employees that have a hire date; employees without one are
/// excluded from both the sum and the denominator.
pub fn compute_utilization(
    shifts: &[&Shift],
    index: &RecordIndex<'_>,
    now: NaiveDateTime,
) -> UtilizationStats {
    let mut utilized: HashSet<&str> = HashSet::new();
    for shift in shifts {
        if let Some(employee) = index.employee_for(shift) {
            utilized.insert(employee.id.as_str());
        }
    }

    let assigned_employee_count = index.employee_count();
    let employees_with_at_least_one_shift = utilized.len();

    let utilization_percent = if assigned_employee_count == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(employees_with_at_least_one_shift) * Decimal::ONE_HUNDRED
            / Decimal::from(assigned_employee_count)
    };

    let mut tenure_months_sum = Decimal::ZERO;
    let mut tenured_count = 0usize;
    for employee in index.employees() {
        if let Some(hire_date) = employee.hire_date {
            tenure_months_sum += Decimal::from(months_between(hire_date, now.date()));
            tenured_count += 1;
        }
    }

    let average_tenure_months = if tenured_count == 0 {
        Decimal::ZERO
    } else {
        tenure_months_sum / Decimal::from(tenured_count)
    };

    UtilizationStats {
        assigned_employee_count,
        employees_with_at_least_one_shift,
        utilization_percent,
        average_tenure_months,
    }
}
