use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// `2024-W52.md` — one file per ISO week.
pub fn week_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%G-W%V"))
}

pub fn week_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%G").to_string())
}

pub fn week_path(root: &Path, date: NaiveDate) -> PathBuf {
    week_dir(root, date).join(week_file_name(date))
}
