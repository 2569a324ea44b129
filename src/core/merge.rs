use crate::domain::model::DateRange;

/// Collapses overlapping or touching ranges into the minimal disjoint set
/// covering the same union of time.
///
/// Intervals are closed: `next.start_date == current.end_date` counts as
/// overlap and the two ranges merge. Each merge step builds a fresh range
/// value rather than extending one in place, so caller-owned ranges are never
/// aliased or mutated.
pub fn merge_overlapping_ranges(ranges: &[DateRange]) -> Vec<DateRange> {
    if ranges.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<DateRange> = ranges.to_vec();
    sorted.sort_by_key(|r| r.start_date);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];

    for next in &sorted[1..] {
        if next.start_date <= current.end_date {
            current = DateRange {
                start_date: current.start_date,
                end_date: current.end_date.max(next.end_date),
            };
        } else {
            merged.push(current);
            current = *next;
        }
    }
    merged.push(current);

    merged
}
