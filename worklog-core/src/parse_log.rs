//! Parses raw daily-log text into a structured [`WeeklyLog`].

use crate::record::{DailyRecord, WeeklyLog};
use crate::section::{Section, UNLABELED_DATE, parse_date_line, parse_section_header};
use std::collections::HashMap;

/// Parses free-form daily log text into a [`WeeklyLog`].
///
/// This is a total function: it never fails and returns a well-formed log for
/// any input, including empty or garbage text. The scan is line by line:
///
/// - A date line (`12-15 | 周一`, `2024-12-23 | 周一`) starts a new entry and
///   closes the previous one.
/// - A line equal to `Plan`, `Result`, `Issues` or `Notes` opens that section
///   for the following bullet lines; a repeated header re-opens its section
///   and appends.
/// - Any other non-blank line is content. A leading `- ` marker is stripped
///   and the line lands in the open section, or in `result` when no section
///   has been opened yet, so nothing the user wrote is dropped.
/// - Blank lines separate things but never close a section or become content.
///
/// Text before the first date line becomes its own entry with the
/// [`UNLABELED_DATE`] sentinel if it has non-blank content; when the input has
/// no date line at all, the whole text becomes one sentinel entry.
pub fn parse(text: &str) -> WeeklyLog {
    if text.trim().is_empty() {
        // Zero-length and whitespace-only input both collapse to a single
        // empty sentinel entry with empty start/end dates.
        return WeeklyLog {
            entries: vec![DailyRecord::unlabeled()],
            start_date: String::new(),
            end_date: String::new(),
        };
    }

    let mut entries: Vec<DailyRecord> = Vec::new();
    let mut builder: Option<RecordBuilder> = None;
    // Blank lines seen before the first entry opens. They carry no content
    // but must survive in some entry's raw slice so that raw_content
    // concatenated over all entries reconstructs the input exactly.
    let mut leading_blanks = String::new();

    // split_inclusive keeps line terminators, which keeps raw slices exact.
    for raw_line in text.split_inclusive('\n') {
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some((date, day_of_week)) = parse_date_line(line) {
            if let Some(done) = builder.take() {
                entries.push(done.finish());
            }
            let mut next = RecordBuilder::new(date, day_of_week);
            next.raw.push_str(&leading_blanks);
            leading_blanks.clear();
            next.raw.push_str(raw_line);
            builder = Some(next);
            continue;
        }

        match builder.as_mut() {
            Some(current) => {
                current.raw.push_str(raw_line);
                current.feed(line);
            }
            None if line.trim().is_empty() => leading_blanks.push_str(raw_line),
            None => {
                // Content before any date line: open a sentinel entry rather
                // than discarding what the user wrote.
                let mut preamble =
                    RecordBuilder::new(UNLABELED_DATE.to_string(), String::new());
                preamble.raw.push_str(&leading_blanks);
                leading_blanks.clear();
                preamble.raw.push_str(raw_line);
                preamble.feed(line);
                builder = Some(preamble);
            }
        }
    }
    if let Some(done) = builder.take() {
        entries.push(done.finish());
    }

    let no_date_fallback = entries.len() == 1 && entries[0].date == UNLABELED_DATE;
    let (start_date, end_date) = if no_date_fallback {
        // Deliberate asymmetry kept from the original behavior: the entry
        // itself carries the sentinel, but the log-level range stays empty.
        (String::new(), String::new())
    } else {
        (
            entries.first().map(|e| e.date.clone()).unwrap_or_default(),
            entries.last().map(|e| e.date.clone()).unwrap_or_default(),
        )
    };

    WeeklyLog {
        entries,
        start_date,
        end_date,
    }
}

/// Per-entry accumulator for the forward scan: one open-section state plus a
/// section → items map, materialized into the fixed record at entry close.
struct RecordBuilder {
    date: String,
    day_of_week: String,
    current: Option<Section>,
    sections: HashMap<Section, Vec<String>>,
    raw: String,
}

impl RecordBuilder {
    fn new(date: String, day_of_week: String) -> Self {
        Self {
            date,
            day_of_week,
            current: None,
            sections: HashMap::new(),
            raw: String::new(),
        }
    }

    /// Classifies one content-or-header line. Date lines never reach here.
    fn feed(&mut self, line: &str) {
        if let Some(section) = parse_section_header(line) {
            self.current = Some(section);
            return;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        let item = trimmed.strip_prefix("- ").unwrap_or(trimmed).trim();
        // Orphan content (no header seen yet) is routed to Result.
        let target = self.current.unwrap_or(Section::Result);
        self.sections
            .entry(target)
            .or_default()
            .push(item.to_string());
    }

    fn finish(mut self) -> DailyRecord {
        DailyRecord {
            date: self.date,
            day_of_week: self.day_of_week,
            plan: self.sections.remove(&Section::Plan).unwrap_or_default(),
            result: self.sections.remove(&Section::Result).unwrap_or_default(),
            issues: self.sections.remove(&Section::Issues).unwrap_or_default(),
            notes: self.sections.remove(&Section::Notes).unwrap_or_default(),
            raw_content: self.raw,
        }
    }
}
