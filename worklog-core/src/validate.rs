//! Classifies raw daily-log text before the parser output is trusted.

use crate::section::{parse_date_line, parse_section_header};
use serde::Serialize;
use strum_macros::AsRefStr;

/// Overall verdict for one raw input.
///
/// `Error` means the caller must not proceed (there is nothing to parse);
/// `Warning` means the text is usable but the user should see guidance;
/// `Valid` means no findings at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Error,
}

/// Machine-readable warning categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WarningKind {
    NoDateLine,
    NoSections,
}

/// One non-fatal finding, with a user-facing message and a fix suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogWarning {
    pub kind: WarningKind,
    pub message: String,
    pub suggestion: String,
}

impl LogWarning {
    fn no_date_line() -> Self {
        Self {
            kind: WarningKind::NoDateLine,
            message: "未找到日期行".to_string(),
            suggestion: "在每天的内容前添加日期行，例如「12-23 | 周一」".to_string(),
        }
    }

    fn no_sections() -> Self {
        Self {
            kind: WarningKind::NoSections,
            message: "未找到 Plan / Result / Issues / Notes 小节".to_string(),
            suggestion: "用 Plan、Result、Issues、Notes 标题行为内容分组".to_string(),
        }
    }
}

/// Diagnostic result for one raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub status: ValidationStatus,
    /// Present only when `status` is [`ValidationStatus::Error`].
    pub error: Option<String>,
    /// Empty unless `status` is [`ValidationStatus::Warning`].
    pub warnings: Vec<LogWarning>,
}

/// Inspects raw text and classifies it as valid, warning or error.
///
/// Total function. Empty or whitespace-only input is the single fatal case;
/// after that all applicable warnings are collected, using the same date-line
/// and header detection as the parser. A partially filled entry (e.g. `Plan`
/// without `Issues`) is not a finding — partial days are expected.
pub fn validate(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult {
            status: ValidationStatus::Error,
            error: Some("请先输入日报内容".to_string()),
            warnings: Vec::new(),
        };
    }

    let mut warnings = Vec::new();
    if !text.lines().any(|line| parse_date_line(line).is_some()) {
        warnings.push(LogWarning::no_date_line());
    }
    if !text.lines().any(|line| parse_section_header(line).is_some()) {
        warnings.push(LogWarning::no_sections());
    }

    let status = if warnings.is_empty() {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Warning
    };
    ValidationResult {
        status,
        error: None,
        warnings,
    }
}
