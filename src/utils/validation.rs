use crate::domain::model::WorkEntry;
use crate::utils::error::{Result, TimelineError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for WorkEntry {
    fn validate(&self) -> Result<()> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(TimelineError::InvertedRange {
                    title: self.title.clone(),
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }
}
