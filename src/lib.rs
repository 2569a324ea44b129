pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::date_math::{days_between, days_to_breakdown};
pub use crate::core::engine::TimelineAnalyzer;
pub use crate::core::experience::total_experience;
pub use crate::core::ingest::{
    parse_date, parse_resume, work_entry_from_raw, ParsedDate, RawWorkRecord,
};
pub use crate::core::merge::merge_overlapping_ranges;
pub use crate::core::progression::career_progression;
pub use crate::core::tenure::average_job_duration;
pub use crate::domain::model::{
    DateRange, DurationBreakdown, ProgressionEntry, TimelineReport, TitleDuration, WorkEntry,
};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{Result, TimelineError};
