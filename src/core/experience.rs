use crate::core::date_math::{days_between, days_to_breakdown};
use crate::core::merge::merge_overlapping_ranges;
use crate::domain::model::{DateRange, DurationBreakdown, WorkEntry};
use chrono::NaiveDate;

/// Total non-overlapping career duration. Concurrent roles are counted once:
/// entries are resolved to ranges (ongoing roles end at `today`), merged into
/// a disjoint set, then summed.
pub fn total_experience(entries: &[WorkEntry], today: NaiveDate) -> DurationBreakdown {
    if entries.is_empty() {
        return DurationBreakdown::default();
    }

    let ranges: Vec<DateRange> = entries.iter().map(|e| e.resolve(today)).collect();
    let merged = merge_overlapping_ranges(&ranges);

    let total_days: f64 = merged
        .iter()
        .map(|r| days_between(r.start_date, r.end_date))
        .sum();

    days_to_breakdown(total_days)
}
