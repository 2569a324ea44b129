use crate::core::date_math::{days_between, days_to_breakdown};
use crate::domain::model::{DurationBreakdown, WorkEntry};
use chrono::NaiveDate;

/// Mean duration across all entries. Deliberately does not merge overlaps:
/// this measures typical single-role tenure, not calendar time.
pub fn average_job_duration(entries: &[WorkEntry], today: NaiveDate) -> DurationBreakdown {
    if entries.is_empty() {
        return DurationBreakdown::default();
    }

    let total_days: f64 = entries
        .iter()
        .map(|e| {
            let range = e.resolve(today);
            days_between(range.start_date, range.end_date)
        })
        .sum();

    days_to_breakdown(total_days / entries.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> WorkEntry {
        WorkEntry {
            title: title.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(
            average_job_duration(&[], date(2024, 1, 1)),
            DurationBreakdown::default()
        );
    }

    #[test]
    fn test_single_entry_average_is_its_duration() {
        let history = vec![entry("Developer", date(2021, 1, 1), Some(date(2022, 1, 1)))];
        assert_eq!(
            average_job_duration(&history, date(2024, 1, 1)),
            DurationBreakdown {
                years: 1,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_mean_of_two_roles() {
        // 365 days and 730 days average to 547.5, rounding the day remainder.
        let history = vec![
            entry("Developer", date(2021, 1, 1), Some(date(2022, 1, 1))),
            entry("Lead", date(2022, 1, 1), Some(date(2024, 1, 1))),
        ];
        assert_eq!(
            average_job_duration(&history, date(2024, 6, 1)),
            DurationBreakdown {
                years: 1,
                months: 6,
                days: 3
            }
        );
    }

    #[test]
    fn test_overlaps_not_collapsed() {
        // Two fully concurrent one-year roles still average to one year each.
        let history = vec![
            entry("Developer", date(2021, 1, 1), Some(date(2022, 1, 1))),
            entry("Consultant", date(2021, 1, 1), Some(date(2022, 1, 1))),
        ];
        assert_eq!(
            average_job_duration(&history, date(2024, 1, 1)),
            DurationBreakdown {
                years: 1,
                months: 0,
                days: 0
            }
        );
    }
}
