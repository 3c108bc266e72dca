use super::theme::LogTheme;
use strum::IntoEnumIterator;
use termimad::MadSkin;
use worklog_core::{Section, UNLABELED_DATE, ValidationResult, ValidationStatus, WeeklyLog};

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: LogTheme::skin(),
            use_color,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Prints every entry of the log as a markdown block: the date line as a
    /// heading, then each non-empty section with its bullets.
    pub fn print_log(&self, log: &WeeklyLog) {
        for (i, entry) in log.entries.iter().enumerate() {
            let heading = if entry.day_of_week.is_empty() {
                format!("# {}", entry.date)
            } else {
                format!("# {} | {}", entry.date, entry.day_of_week)
            };
            let mut md = String::new();
            md.push_str(&heading);
            md.push('\n');
            for section in Section::iter() {
                let items = entry.items(section);
                if items.is_empty() {
                    continue;
                }
                md.push_str(&format!("## {}\n", section.as_ref()));
                for item in items {
                    md.push_str(&format!("* {item}\n"));
                }
            }
            self.print_md(&md);
            if i + 1 < log.entries.len() {
                println!();
            }
        }
    }

    /// One-line summary plus per-warning guidance for a validation report.
    pub fn print_report(&self, report: &ValidationResult) {
        match report.status {
            ValidationStatus::Valid => {}
            ValidationStatus::Error => {
                if let Some(error) = &report.error {
                    self.print_md(&format!("**{error}**"));
                }
            }
            ValidationStatus::Warning => {
                self.print_md("# Warnings:");
                for warning in &report.warnings {
                    self.print_md(&format!(
                        "* `{}` {}（{}）",
                        warning.kind.as_ref(),
                        warning.message,
                        warning.suggestion
                    ));
                }
            }
        }
    }

    /// Whether a loaded week has anything worth printing besides the
    /// parser's sentinel fallback entry.
    pub fn log_is_blank(log: &WeeklyLog) -> bool {
        log.entries.len() == 1
            && log.entries[0].date == UNLABELED_DATE
            && log.entries[0].raw_content.is_empty()
    }
}
