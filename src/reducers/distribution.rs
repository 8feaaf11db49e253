//! Shift distribution reduction: weekday, time-of-day, busiest window, and
//! duration mode.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BusiestWindow, DistributionStats, Shift, TimeOfDayCounts};
use crate::time::{hour_of_day, weekday_index};

/// The number of hourly buckets in a day.
const HOURS_PER_DAY: usize = 24;

/// Computes the distribution of shift starts for a shift slice.
///
/// All buckets key on the shift's start instant: weekday counts use
/// Monday = 0, time-of-day buckets are morning [5, 12), afternoon [12, 17),
/// evening [17, 22), and night otherwise (the night bucket wraps midnight).
///
/// The busiest window slides a `window_hours`-wide circular window over the
/// 24 hourly start counts and keeps the start with the maximum sum; ties go
/// to the lowest start hour because the scan runs 0 through 23 and keeps the
/// first maximum. `window_hours` is clamped into 1..=24.
///
/// The most common duration is the mode of per-shift durations rounded
/// half-away-from-zero to whole hours; ties go to the first duration value
/// encountered in iteration order, and an empty slice yields 0.
///
/// # Examples
///
/// ```
/// use shift_analytics::reducers::compute_distribution;
///
/// let stats = compute_distribution(&[], 8);
/// assert_eq!(stats.busiest_window.count, 0);
/// assert_eq!(stats.most_common_duration_hours, 0);
/// ```
pub fn compute_distribution(shifts: &[&Shift], window_hours: u32) -> DistributionStats {
    let mut counts_by_weekday = [0usize; 7];
    let mut counts_by_hour = [0usize; HOURS_PER_DAY];
    let mut counts_by_time_of_day = TimeOfDayCounts::default();

    for shift in shifts {
        counts_by_weekday[weekday_index(shift.start_time)] += 1;

        let hour = hour_of_day(shift.start_time);
        counts_by_hour[hour as usize] += 1;

        match hour {
            5..=11 => counts_by_time_of_day.morning += 1,
            12..=16 => counts_by_time_of_day.afternoon += 1,
            17..=21 => counts_by_time_of_day.evening += 1,
            _ => counts_by_time_of_day.night += 1,
        }
    }

    let busiest_window = find_busiest_window(&counts_by_hour, window_hours);
    let most_common_duration_hours = most_common_duration(shifts);

    DistributionStats {
        counts_by_weekday,
        counts_by_time_of_day,
        busiest_window,
        most_common_duration_hours,
    }
}

/// Finds the circular window of `window_hours` consecutive hourly buckets
/// with the largest total, preferring the lowest start hour on ties.
fn find_busiest_window(counts_by_hour: &[usize; HOURS_PER_DAY], window_hours: u32) -> BusiestWindow {
    let width = window_hours.clamp(1, HOURS_PER_DAY as u32) as usize;

    let mut best_start = 0usize;
    let mut best_count = 0usize;
    for start in 0..HOURS_PER_DAY {
        let count: usize = (0..width)
            .map(|i| counts_by_hour[(start + i) % HOURS_PER_DAY])
            .sum();
        // Strict comparison keeps the first (lowest) start on ties.
        if count > best_count {
            best_count = count;
            best_start = start;
        }
    }

    BusiestWindow {
        start_hour: best_start as u32,
        end_hour: ((best_start + width) % HOURS_PER_DAY) as u32,
        count: best_count,
    }
}

/// Returns the mode of shift durations rounded to whole hours.
///
/// Ties break to the first value encountered in iteration order, which
/// keeps the result stable for a given input ordering.
fn most_common_duration(shifts: &[&Shift]) -> i64 {
    if shifts.is_empty() {
        return 0;
    }

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for shift in shifts {
        *counts.entry(rounded_hours(shift)).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);

    // Rescan in input order so the first value holding the maximum wins.
    shifts
        .iter()
        .map(|shift| rounded_hours(shift))
        .find(|hours| counts.get(hours) == Some(&max_count))
        .unwrap_or(0)
}

fn rounded_hours(shift: &Shift) -> i64 {
    shift
        .duration_hours()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
