use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Invalid date in '{field}': '{value}' ({reason})")]
    InvalidDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inverted range for '{title}': end {end} precedes start {start}")]
    InvertedRange {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Resume document error: {0}")]
    Document(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
