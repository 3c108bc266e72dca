//! The file-backed `Logbook`, tying config, paths and the pure core together.

use crate::config::Config;
use crate::parse_log::parse;
use crate::paths::week_path;
use crate::record::WeeklyLog;
use crate::render_log::format_weekly_log;
use crate::validate::{ValidationResult, validate};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Everything loaded for one week file: the parsed log, the diagnostics for
/// the raw text, and where it came from.
#[derive(Debug)]
pub struct LoadedWeek {
    pub log: WeeklyLog,
    pub report: ValidationResult,
    pub path: PathBuf,
}

/// The central struct for all on-disk log operations.
///
/// Holds the configuration and reads/writes one text file per ISO week. The
/// parsing, validation and rendering it delegates to are pure; only this
/// layer touches the filesystem.
#[derive(Debug)]
pub struct Logbook {
    pub config: Config,
}

impl Logbook {
    /// Creates a new `Logbook`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Logbook` with a specific `Config`.
    ///
    /// This also ensures that the log root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("creating {}", config.log_dir.display()))?;
        Ok(Self { config })
    }

    /// Reads and parses the week file containing `date`.
    ///
    /// A missing file behaves exactly like empty input: the parser still
    /// returns its single sentinel entry and the validator reports the
    /// empty-input error, so callers get one uniform shape either way.
    pub fn load_week(&self, date: NaiveDate) -> Result<LoadedWeek> {
        let path = week_path(&self.config.log_dir, date);
        let text = if path.exists() {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
        } else {
            String::new()
        };
        Ok(LoadedWeek {
            report: validate(&text),
            log: parse(&text),
            path,
        })
    }

    /// Writes raw log text for the week containing `date`, verbatim.
    ///
    /// The text is stored as the user wrote it; canonicalization is a
    /// separate, explicit step ([`Self::format_week`]).
    pub fn save_week(&self, date: NaiveDate, text: &str) -> Result<PathBuf> {
        let path = week_path(&self.config.log_dir, date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Ensures the week file for `date` exists (creating it empty when
    /// missing) and returns its path. Existing content is left untouched.
    pub fn save_week_if_missing(&self, date: NaiveDate) -> Result<PathBuf> {
        let path = week_path(&self.config.log_dir, date);
        if path.exists() {
            return Ok(path);
        }
        self.save_week(date, "")
    }

    /// Canonical re-rendering of an existing week file, or `None` when the
    /// file does not exist yet.
    pub fn format_week(&self, date: NaiveDate) -> Result<Option<String>> {
        let path = week_path(&self.config.log_dir, date);
        if !path.exists() {
            return Ok(None);
        }
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(format_weekly_log(&parse(&text))))
    }
}
