//! Record lookup index shared by the metric reducers.
//!
//! Input data arrives as flat arrays, and every derived metric needs the
//! employee (and rate) behind a shift. Resolving that with a linear scan
//! inside each reducer loop is an O(n*m) join; [`RecordIndex`] performs the
//! join once per facade call and hands the reducers O(1) lookups.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Employee, Location, Shift};

/// The employee and hourly rate resolved for a single shift at build time.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStaffing<'a> {
    /// The assigned employee, if the shift's reference resolved.
    pub employee: Option<&'a Employee>,
    /// Snapshot of the assigned employee's hourly rate, if any.
    pub hourly_rate: Option<Decimal>,
}

/// Precomputed id lookups over the caller's record arrays.
///
/// Built in a single O(n + m) pass. Missing or unknown references resolve
/// to `None`; building an index never fails. The index borrows the caller's
/// records and holds no owned state, so it is rebuilt fresh on every facade
/// call.
#[derive(Debug)]
pub struct RecordIndex<'a> {
    employee_by_id: HashMap<&'a str, &'a Employee>,
    location_by_id: HashMap<&'a str, &'a Location>,
    staffing_by_shift: HashMap<&'a str, ResolvedStaffing<'a>>,
}

impl<'a> RecordIndex<'a> {
    /// Builds the index from the supplied record arrays.
    ///
    /// For each shift the assigned employee reference is resolved once and
    /// the employee's hourly rate snapshotted, so reducers never rescan the
    /// employee array.
    pub fn build(
        shifts: &[&'a Shift],
        employees: &'a [Employee],
        locations: &'a [Location],
    ) -> Self {
        let employee_by_id: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.id.as_str(), e)).collect();
        let location_by_id: HashMap<&str, &Location> =
            locations.iter().map(|l| (l.id.as_str(), l)).collect();

        let staffing_by_shift = shifts
            .iter()
            .map(|shift| {
                let employee = shift
                    .employee_id
                    .as_deref()
                    .and_then(|id| employee_by_id.get(id).copied());
                let staffing = ResolvedStaffing {
                    employee,
                    hourly_rate: employee.and_then(|e| e.hourly_rate),
                };
                (shift.id.as_str(), staffing)
            })
            .collect();

        Self {
            employee_by_id,
            location_by_id,
            staffing_by_shift,
        }
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&'a Employee> {
        self.employee_by_id.get(id).copied()
    }

    /// Looks up a location by id.
    pub fn location(&self, id: &str) -> Option<&'a Location> {
        self.location_by_id.get(id).copied()
    }

    /// Returns the employee resolved for a shift at build time.
    pub fn employee_for(&self, shift: &Shift) -> Option<&'a Employee> {
        self.staffing_by_shift
            .get(shift.id.as_str())
            .and_then(|s| s.employee)
    }

    /// Returns the hourly-rate snapshot resolved for a shift at build time.
    pub fn rate_for(&self, shift: &Shift) -> Option<Decimal> {
        self.staffing_by_shift
            .get(shift.id.as_str())
            .and_then(|s| s.hourly_rate)
    }

    /// Returns the number of employees known to the index.
    pub fn employee_count(&self) -> usize {
        self.employee_by_id.len()
    }

    /// Iterates over every employee known to the index.
    pub fn employees(&self) -> impl Iterator<Item = &'a Employee> + '_ {
        self.employee_by_id.values().copied()
    }
}
