use crate::domain::model::DurationBreakdown;
use chrono::NaiveDate;

const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Whole days from `start` to `end`. Zero when equal, negative when
/// `end < start` (inverted ranges are rejected upstream, not here).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> f64 {
    end.signed_duration_since(start).num_days() as f64
}

/// Splits a day count into fixed 365-day years and 30-day months. The block
/// arithmetic is the contract every aggregate is defined against:
/// 400 days -> {1y, 1m, 5d}, 365 days -> {1y, 0m, 0d}.
pub fn days_to_breakdown(total_days: f64) -> DurationBreakdown {
    if total_days <= 0.0 {
        return DurationBreakdown::default();
    }

    let years = (total_days / DAYS_PER_YEAR).floor();
    let remainder = total_days % DAYS_PER_YEAR;
    let months = (remainder / DAYS_PER_MONTH).floor();
    let days = (remainder % DAYS_PER_MONTH).round();

    DurationBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    }
}
