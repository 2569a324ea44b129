pub mod date_math;
pub mod engine;
pub mod experience;
pub mod ingest;
pub mod merge;
pub mod progression;
pub mod tenure;

pub use crate::domain::model::{
    DateRange, DurationBreakdown, ProgressionEntry, TimelineReport, TitleDuration, WorkEntry,
};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
