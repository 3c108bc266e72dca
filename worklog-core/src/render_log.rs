//! Renders a parsed [`WeeklyLog`] back into canonical text.
//!
//! Date line:  `12-15 | 周一` (pipe omitted when the weekday is empty)
//! Section:
//!   Plan
//!   - item
//!
//! Empty sections are skipped entirely; that policy is asserted in tests and
//! is what keeps `parse(format(log))` structurally equal to `log`.

use crate::record::{DailyRecord, WeeklyLog};
use strum::IntoEnumIterator;

use crate::section::Section;

/// Renders every entry of the log, in order, separated by blank lines.
///
/// Total over parser-produced logs. The output carries exactly one trailing
/// newline; a log with no entries renders as the empty string.
pub fn format_weekly_log(log: &WeeklyLog) -> String {
    let mut out: String = log.entries.iter().map(format_record).collect();
    let trimmed_len = out.trim_end_matches('\n').len();
    out.truncate(trimmed_len);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Renders one entry: date line, blank line, then each non-empty section in
/// the fixed Plan/Result/Issues/Notes order.
pub fn format_record(record: &DailyRecord) -> String {
    let mut out = String::new();
    if record.day_of_week.is_empty() {
        out.push_str(&record.date);
    } else {
        out.push_str(&record.date);
        out.push_str(" | ");
        out.push_str(&record.day_of_week);
    }
    out.push_str("\n\n");

    for section in Section::iter() {
        let items = record.items(section);
        if items.is_empty() {
            continue;
        }
        out.push_str(section.as_ref());
        out.push('\n');
        for item in items {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_log::parse;
    use crate::section::UNLABELED_DATE;

    #[test]
    fn renders_sections_in_fixed_order() {
        let mut record = DailyRecord::unlabeled();
        record.date = "12-15".to_string();
        record.day_of_week = "周一".to_string();
        record.notes = vec!["备注".to_string()];
        record.plan = vec!["计划".to_string()];
        let text = format_record(&record);
        assert_eq!(text, "12-15 | 周一\n\nPlan\n- 计划\n\nNotes\n- 备注\n\n");
    }

    #[test]
    fn omits_pipe_without_weekday() {
        let mut record = DailyRecord::unlabeled();
        record.date = "12-15".to_string();
        record.result = vec!["完成".to_string()];
        let text = format_record(&record);
        assert!(text.starts_with("12-15\n\n"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn sentinel_date_renders_verbatim() {
        let record = DailyRecord::unlabeled();
        assert_eq!(format_record(&record), format!("{UNLABELED_DATE}\n\n"));
    }

    #[test]
    fn empty_sections_are_skipped() {
        let mut record = DailyRecord::unlabeled();
        record.date = "12-15".to_string();
        record.plan = vec!["A".to_string()];
        let text = format_record(&record);
        assert!(text.contains("Plan\n"));
        assert!(!text.contains("Result"));
        assert!(!text.contains("Issues"));
        assert!(!text.contains("Notes"));
    }

    #[test]
    fn log_output_has_single_trailing_newline() {
        let log = parse("12-15 | 周一\nPlan\n- A");
        let text = format_weekly_log(&log);
        assert!(text.ends_with("- A\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn empty_entry_list_renders_empty_string() {
        let log = WeeklyLog {
            entries: Vec::new(),
            start_date: String::new(),
            end_date: String::new(),
        };
        assert_eq!(format_weekly_log(&log), "");
    }

    #[test]
    fn two_entry_log_renders_canonically() {
        let log = parse("12-15 | 周一\nPlan\n- A\n\nResult\n- B\n\n12-16 | 周二\nPlan\n- C");
        assert_eq!(
            format_weekly_log(&log),
            "12-15 | 周一\n\nPlan\n- A\n\nResult\n- B\n\n12-16 | 周二\n\nPlan\n- C\n"
        );
    }

    /// The core round-trip contract: re-parsing formatted output reproduces
    /// every field except `raw_content`.
    #[test]
    fn round_trip_preserves_structure() {
        let inputs = [
            "12-15 | 周一\nPlan\n- A\n\nResult\n- B\n\n12-16 | 周二\nPlan\n- C",
            "2024-12-23 | 周一\nPlan\n- X",
            "12-23 | 周一\n前置说明\n\nPlan\n- 计划任务",
            "12-15 | 周一\nPlan\n- A\nResult\n- B\nPlan\n- C",
            "12-15\nIssues\n- 阻塞\nNotes\n- 周会纪要",
        ];
        for input in inputs {
            let first = parse(input);
            let second = parse(&format_weekly_log(&first));
            assert_eq!(second.entries.len(), first.entries.len(), "{input:?}");
            for (a, b) in first.entries.iter().zip(second.entries.iter()) {
                assert_eq!(a.date, b.date);
                assert_eq!(a.day_of_week, b.day_of_week);
                assert_eq!(a.plan, b.plan);
                assert_eq!(a.result, b.result);
                assert_eq!(a.issues, b.issues);
                assert_eq!(a.notes, b.notes);
            }
            assert_eq!(second.start_date, first.start_date);
            assert_eq!(second.end_date, first.end_date);
        }
    }

    /// Formatting is idempotent once the text is canonical.
    #[test]
    fn format_is_idempotent_on_canonical_text() {
        let canonical = format_weekly_log(&parse(
            "12-15 | 周一\nPlan\n- A\n\nResult\n- B\n\n12-16 | 周二\nPlan\n- C",
        ));
        assert_eq!(format_weekly_log(&parse(&canonical)), canonical);
    }
}
