use chrono::{NaiveDate, Utc};

/// Source of the analysis date. Injected so every computation stays pure and
/// deterministically testable instead of reading the wall clock mid-run.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real clock, UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Pinned clock for tests and reproducible reports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
