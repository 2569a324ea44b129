use crate::core::date_math::days_between;
use crate::domain::model::{ProgressionEntry, TitleDuration, WorkEntry};
use chrono::NaiveDate;
use std::collections::HashMap;

const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Per-title totals keyed by first appearance. The key-order list carries the
/// output ordering; the map is lookup only, its iteration order is never used.
struct TitleBuckets {
    order: Vec<String>,
    totals: HashMap<String, TitleDuration>,
}

impl TitleBuckets {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    fn add(&mut self, title: &str, years: u32, months: u32) {
        let bucket = self.totals.entry(title.to_string()).or_insert_with(|| {
            self.order.push(title.to_string());
            TitleDuration::default()
        });
        bucket.years += years;
        bucket.months += months;
    }

    fn into_entries(mut self) -> Vec<ProgressionEntry> {
        self.order
            .into_iter()
            .map(|title| {
                let mut duration = self.totals.remove(&title).unwrap_or_default();
                while duration.months >= 12 {
                    duration.years += 1;
                    duration.months -= 12;
                }
                ProgressionEntry { title, duration }
            })
            .collect()
    }
}

/// Cumulative time held per distinct title, in first-seen order. Periods are
/// summed independently with no overlap collapsing, so a title held twice
/// counts both periods in full. Day remainders are discarded; every returned
/// bucket satisfies `months < 12`.
pub fn career_progression(entries: &[WorkEntry], today: NaiveDate) -> Vec<ProgressionEntry> {
    let mut buckets = TitleBuckets::new();

    for entry in entries {
        let range = entry.resolve(today);
        let total_days = days_between(range.start_date, range.end_date).max(0.0);
        let years = (total_days / DAYS_PER_YEAR).floor() as u32;
        let months = ((total_days % DAYS_PER_YEAR) / DAYS_PER_MONTH).floor() as u32;
        buckets.add(&entry.title, years, months);
    }

    buckets.into_entries()
}
