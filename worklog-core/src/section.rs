//! Line classification: section header tokens and date lines.

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Date token used when no date line could be recognized for an entry.
pub const UNLABELED_DATE: &str = "未标注";

/// The four fixed content categories of a daily entry, in render order.
///
/// Header tokens are the exact variant names (`Plan`, `Result`, `Issues`,
/// `Notes`), case-sensitive. New section kinds should be added here rather
/// than as new record fields, so the parser and formatter keep iterating one
/// closed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum Section {
    Plan,
    Result,
    Issues,
    Notes,
}

/// A date line is `<date>` optionally followed by `| <weekday>`, where the
/// date is `MM-DD` or `YYYY-MM-DD` and the weekday is free text. The pipe
/// half is optional so that formatted entries without a weekday parse back.
static DATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4}-\d{2}-\d{2}|\d{2}-\d{2})\s*(?:\|\s*(.*?))?\s*$").unwrap()
});

/// Splits a date line into its date token and weekday label.
///
/// Returns `None` when the line is not a date line. The weekday comes back
/// verbatim (trimmed), empty when the pipe half is missing.
pub fn parse_date_line(line: &str) -> Option<(String, String)> {
    let caps = DATE_LINE.captures(line)?;
    let date = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
    let weekday = caps.get(2).map(|m| m.as_str().trim().to_string()).unwrap_or_default();
    Some((date, weekday))
}

/// Recognizes a section header: the whole line must equal one of the four
/// tokens, case-sensitively.
pub fn parse_section_header(line: &str) -> Option<Section> {
    Section::from_str(line).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_line_with_weekday() {
        assert_eq!(
            parse_date_line("12-15 | 周一"),
            Some(("12-15".to_string(), "周一".to_string()))
        );
    }

    #[test]
    fn full_date_line_with_weekday() {
        assert_eq!(
            parse_date_line("2024-12-23 | 周一"),
            Some(("2024-12-23".to_string(), "周一".to_string()))
        );
    }

    #[test]
    fn date_line_without_weekday() {
        assert_eq!(
            parse_date_line("12-15"),
            Some(("12-15".to_string(), String::new()))
        );
        assert_eq!(
            parse_date_line("12-15 |"),
            Some(("12-15".to_string(), String::new()))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_date_line("  12-15  |  周一  "),
            Some(("12-15".to_string(), "周一".to_string()))
        );
    }

    #[test]
    fn non_date_lines_are_rejected() {
        assert_eq!(parse_date_line("随机文本"), None);
        assert_eq!(parse_date_line("12-150 | 周一"), None);
        assert_eq!(parse_date_line("12-15 周一"), None);
        assert_eq!(parse_date_line(""), None);
    }

    #[test]
    fn headers_match_exactly() {
        assert_eq!(parse_section_header("Plan"), Some(Section::Plan));
        assert_eq!(parse_section_header("Result"), Some(Section::Result));
        assert_eq!(parse_section_header("Issues"), Some(Section::Issues));
        assert_eq!(parse_section_header("Notes"), Some(Section::Notes));
    }

    #[test]
    fn headers_are_case_sensitive_and_whole_line() {
        assert_eq!(parse_section_header("plan"), None);
        assert_eq!(parse_section_header("PLAN"), None);
        assert_eq!(parse_section_header("Plan:"), None);
        assert_eq!(parse_section_header("My Plan"), None);
    }
}
