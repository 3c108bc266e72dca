//! Value types produced by the daily log parser.

use crate::section::{Section, UNLABELED_DATE};
use serde::Serialize;

/// One calendar day's entry, as written in the weekly log.
///
/// All fields are owned values; a record is created once by the parser and
/// never mutated afterwards. `raw_content` keeps the exact source lines that
/// produced the record, so callers can always show the user what they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Date token as written: `MM-DD`, `YYYY-MM-DD`, or [`UNLABELED_DATE`]
    /// when no date line was recognized for this entry.
    pub date: String,
    /// Free-text weekday label taken verbatim from the date line (e.g. `周一`).
    /// Empty when absent.
    pub day_of_week: String,
    pub plan: Vec<String>,
    pub result: Vec<String>,
    pub issues: Vec<String>,
    pub notes: Vec<String>,
    /// The original text slice (lines, with terminators) behind this record.
    pub raw_content: String,
}

impl DailyRecord {
    /// A record carrying the sentinel date and nothing else.
    pub fn unlabeled() -> Self {
        Self {
            date: UNLABELED_DATE.to_string(),
            day_of_week: String::new(),
            plan: Vec::new(),
            result: Vec::new(),
            issues: Vec::new(),
            notes: Vec::new(),
            raw_content: String::new(),
        }
    }

    /// Items of one section, addressed by tag instead of field name.
    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Plan => &self.plan,
            Section::Result => &self.result,
            Section::Issues => &self.issues,
            Section::Notes => &self.notes,
        }
    }
}

/// Parse result for one raw input: every day entry in source order.
///
/// Entries are never sorted or merged; duplicate dates stay as separate
/// entries, exactly as they appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyLog {
    pub entries: Vec<DailyRecord>,
    /// Date token of the first entry. Empty when the whole input was parsed
    /// through the "no date line anywhere" fallback.
    pub start_date: String,
    /// Date token of the last entry, same fallback rule as `start_date`.
    pub end_date: String,
}
