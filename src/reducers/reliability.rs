//! Reliability and completion-rate reduction.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{ReliabilityStats, Shift};

/// Computes completion and no-show statistics for a shift slice.
///
/// A shift is "past" once its end time is strictly before `now`. Completed
/// counts are restricted to past shifts; canceled counts are not (a future
/// cancellation is already a fact). The no-show count is whatever remains
/// of the past shifts after completed and canceled are subtracted, clamped
/// at zero; a canceled shift is never a no-show.
///
/// With no past shifts the completion rate is 100 (no failures are possible
/// yet) and the no-show rate is 0. Both rates always land in [0, 100].
///
/// # Examples
///
/// ```
/// use shift_analytics::reducers::compute_reliability;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let now = NaiveDateTime::parse_from_str("2024-06-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let stats = compute_reliability(&[], now);
/// assert_eq!(stats.completion_rate_percent, Decimal::new(100, 0));
/// assert_eq!(stats.no_show_rate_percent, Decimal::ZERO);
/// ```
pub fn compute_reliability(shifts: &[&Shift], now: NaiveDateTime) -> ReliabilityStats {
    let past_shift_count = shifts.iter().filter(|s| s.is_past(now)).count();
    let completed_count = shifts
        .iter()
        .filter(|s| s.is_past(now) && s.is_completed())
        .count();
    let canceled_count = shifts.iter().filter(|s| s.is_canceled()).count();
    let no_show_count = past_shift_count.saturating_sub(completed_count + canceled_count);

    let completion_rate_percent = if past_shift_count == 0 {
        Decimal::ONE_HUNDRED
    } else {
        ratio_percent(completed_count, past_shift_count)
    };
    let no_show_rate_percent = if past_shift_count == 0 {
        Decimal::ZERO
    } else {
        ratio_percent(no_show_count, past_shift_count)
    };

    ReliabilityStats {
        past_shift_count,
        completed_count,
        canceled_count,
        no_show_count,
        completion_rate_percent,
        no_show_rate_percent,
    }
}

fn ratio_percent(numerator: usize, denominator: usize) -> Decimal {
    Decimal::from(numerator) * Decimal::ONE_HUNDRED / Decimal::from(denominator)
}
