use crate::domain::model::WorkEntry;
use crate::utils::error::{Result, TimelineError};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use serde::Deserialize;

/// One record of a résumé document's `work` array, as collaborators send it.
/// JSON-résumé documents use `position` for the job title; both spellings are
/// accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkRecord {
    #[serde(alias = "position")]
    pub title: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawResume {
    #[serde(default)]
    work: Vec<RawWorkRecord>,
}

/// Outcome of parsing one date string. Parse failures are carried as values
/// to the ingestion boundary, where they become typed errors; they never flow
/// into the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDate {
    Valid(NaiveDate),
    Invalid { value: String, reason: String },
}

/// Parses an ISO-8601 date. Résumé documents commonly truncate to `YYYY-MM`
/// or `YYYY`; those resolve to the first day of the period.
pub fn parse_date(value: &str) -> ParsedDate {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return ParsedDate::Valid(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return ParsedDate::Valid(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d") {
        return ParsedDate::Valid(date);
    }
    ParsedDate::Invalid {
        value: value.to_string(),
        reason: "expected YYYY-MM-DD, YYYY-MM or YYYY".to_string(),
    }
}

fn require_date(field: &str, value: &str) -> Result<NaiveDate> {
    match parse_date(value) {
        ParsedDate::Valid(date) => Ok(date),
        ParsedDate::Invalid { value, reason } => Err(TimelineError::InvalidDate {
            field: field.to_string(),
            value,
            reason,
        }),
    }
}

/// Converts one raw record into a validated `WorkEntry`. Unparsable dates and
/// inverted ranges fail fast here so every downstream computation works on
/// well-formed input.
pub fn work_entry_from_raw(raw: &RawWorkRecord) -> Result<WorkEntry> {
    let start_date = require_date("startDate", &raw.start_date)?;
    let end_date = raw
        .end_date
        .as_deref()
        .map(|value| require_date("endDate", value))
        .transpose()?;

    let entry = WorkEntry {
        title: raw.title.clone(),
        start_date,
        end_date,
    };
    entry.validate()?;
    Ok(entry)
}

/// Parses a full résumé JSON document into a work history. A missing or empty
/// `work` array is an empty history, not an error.
pub fn parse_resume(json: &str) -> Result<Vec<WorkEntry>> {
    let resume: RawResume = serde_json::from_str(json)?;
    resume.work.iter().map(work_entry_from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full_date() {
        assert_eq!(parse_date("2020-02-29"), ParsedDate::Valid(date(2020, 2, 29)));
    }

    #[test]
    fn test_parse_partial_dates() {
        assert_eq!(parse_date("2020-06"), ParsedDate::Valid(date(2020, 6, 1)));
        assert_eq!(parse_date("2020"), ParsedDate::Valid(date(2020, 1, 1)));
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        assert!(matches!(parse_date("soon"), ParsedDate::Invalid { .. }));
        assert!(matches!(parse_date("2021-02-30"), ParsedDate::Invalid { .. }));
    }

    #[test]
    fn test_resume_work_array_parsed() {
        let json = r#"{
            "basics": { "name": "Ada" },
            "work": [
                { "position": "Developer", "startDate": "2020-01-01", "endDate": "2021-01-01" },
                { "title": "Lead", "startDate": "2021-01" }
            ]
        }"#;
        let history = parse_resume(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].title, "Developer");
        assert_eq!(history[0].end_date, Some(date(2021, 1, 1)));
        assert_eq!(history[1].title, "Lead");
        assert_eq!(history[1].start_date, date(2021, 1, 1));
        assert_eq!(history[1].end_date, None);
    }

    #[test]
    fn test_missing_work_array_is_empty_history() {
        let history = parse_resume(r#"{ "basics": { "name": "Ada" } }"#).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_unparsable_date_fails_fast() {
        let json = r#"{ "work": [ { "title": "Developer", "startDate": "whenever" } ] }"#;
        assert!(matches!(
            parse_resume(json),
            Err(TimelineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = r#"{
            "work": [
                { "title": "Developer", "startDate": "2022-01-01", "endDate": "2021-01-01" }
            ]
        }"#;
        assert!(matches!(
            parse_resume(json),
            Err(TimelineError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_null_end_date_is_ongoing() {
        let json = r#"{
            "work": [
                { "title": "Developer", "startDate": "2023-01-01", "endDate": null }
            ]
        }"#;
        let history = parse_resume(json).unwrap();
        assert_eq!(history[0].end_date, None);
    }
}
