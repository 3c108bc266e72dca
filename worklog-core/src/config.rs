use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where weekly log files live.
    pub log_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI
    /// will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    log_dir: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything missing.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            log_dir: None,
            editor: None,
        });

        let log_dir = file_config.log_dir.unwrap_or_else(Self::default_log_dir);

        Ok(Self {
            log_dir,
            editor: file_config.editor,
        })
    }

    /// Default log root: `{data_dir}/worklog`
    /// - macOS:   `~/Library/Application Support/worklog`
    /// - Linux:   `$XDG_DATA_HOME/worklog` or `~/.local/share/worklog`
    /// - Windows: `%APPDATA%\worklog`
    fn default_log_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("worklog");
            p
        } else {
            PathBuf::from("./worklog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("worklog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("worklog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            log_dir: None,
            editor: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(log_dir: PathBuf) -> Config {
        Config {
            log_dir,
            editor: None,
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("worklog")
                .join("config.toml");
            let expected_native = b.config_dir().join("worklog").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_log_dir_and_editor() {
        let toml = r#"
            log_dir = "/tmp/my-worklog"
            editor = "hx"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.log_dir.as_deref(), Some(Path::new("/tmp/my-worklog")));
        assert_eq!(fc.editor.as_deref(), Some("hx"));
    }

    #[test]
    fn parse_file_accepts_partial_config() {
        let fc = super::Config::parse_file(r#"editor = "vim""#).unwrap();
        assert!(fc.log_dir.is_none());
        assert_eq!(fc.editor.as_deref(), Some("vim"));
    }
}
