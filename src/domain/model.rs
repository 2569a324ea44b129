use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employment record. `end_date = None` means the role is ongoing and is
/// resolved against the analysis date at computation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl WorkEntry {
    /// Resolves the entry to a concrete range, substituting `today` for an
    /// ongoing end date.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        DateRange {
            start_date: self.start_date,
            end_date: self.end_date.unwrap_or(today),
        }
    }
}

/// A concrete employment period. Well-formed ranges satisfy
/// `start_date <= end_date`; enforced at the ingestion boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Duration in fixed 365-day years and 30-day months, not calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Cumulative time under one title. No day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleDuration {
    pub years: u32,
    pub months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub title: String,
    pub duration: TitleDuration,
}

/// All three aggregates in one structure, the shape the analytics display
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineReport {
    pub total_experience: DurationBreakdown,
    pub average_job_duration: DurationBreakdown,
    pub career_progression: Vec<ProgressionEntry>,
}
