pub mod config;
pub mod logbook;
pub mod parse_log;
pub mod paths;
pub mod record;
pub mod render_log;
pub mod section;
pub mod validate;

pub use config::Config;
pub use logbook::{LoadedWeek, Logbook};
pub use parse_log::parse;
pub use record::{DailyRecord, WeeklyLog};
pub use render_log::{format_record, format_weekly_log};
pub use section::{Section, UNLABELED_DATE};
pub use validate::{LogWarning, ValidationResult, ValidationStatus, WarningKind, validate};
