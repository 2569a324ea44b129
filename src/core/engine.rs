use crate::core::experience::total_experience;
use crate::core::progression::career_progression;
use crate::core::tenure::average_job_duration;
use crate::domain::model::{DurationBreakdown, ProgressionEntry, TimelineReport, WorkEntry};
use crate::domain::ports::{Clock, SystemClock};

/// Facade over the aggregate functions, resolving the analysis date from an
/// injected clock. Pure apart from the clock read; holds no state between
/// calls.
pub struct TimelineAnalyzer<C: Clock = SystemClock> {
    clock: C,
}

impl TimelineAnalyzer<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for TimelineAnalyzer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimelineAnalyzer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn total_experience(&self, work: &[WorkEntry]) -> DurationBreakdown {
        total_experience(work, self.clock.today())
    }

    pub fn average_job_duration(&self, work: &[WorkEntry]) -> DurationBreakdown {
        average_job_duration(work, self.clock.today())
    }

    pub fn career_progression(&self, work: &[WorkEntry]) -> Vec<ProgressionEntry> {
        career_progression(work, self.clock.today())
    }

    /// Computes all three aggregates against a single analysis date.
    pub fn analyze(&self, work: &[WorkEntry]) -> TimelineReport {
        let today = self.clock.today();
        tracing::debug!(entries = work.len(), %today, "analyzing work history");

        let report = TimelineReport {
            total_experience: total_experience(work, today),
            average_job_duration: average_job_duration(work, today),
            career_progression: career_progression(work, today),
        };

        tracing::debug!(
            years = report.total_experience.years,
            months = report.total_experience.months,
            titles = report.career_progression.len(),
            "analysis complete"
        );
        report
    }
}
