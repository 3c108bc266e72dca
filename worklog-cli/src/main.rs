mod render;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::Parser;
use render::{ColorMode, Renderer};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::fs;
use worklog_core::{Logbook, ValidationStatus, format_weekly_log, parse, validate};

/// worklog — structured weekly work logs
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the log root directory
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Show the week containing this date (e.g. `worklog --on 2024-12-23`).
    /// Defaults to today when no other mode is selected.
    #[arg(long)]
    on: Option<String>,
    /// Validate a log file and report warnings. Use `-` for stdin.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["on", "fmt", "edit"])]
    check: Option<PathBuf>,
    /// Reformat a log file into canonical form on stdout. Use `-` for stdin.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["on", "check", "edit"])]
    fmt: Option<PathBuf>,
    /// With --fmt: rewrite the file in place instead of printing.
    #[arg(long, requires = "fmt")]
    write: bool,
    /// Opens your $EDITOR with the selected week's file.
    #[arg(long, short, conflicts_with_all = ["check", "fmt"])]
    edit: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("worklog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(use_color);

    // Check and fmt modes work on plain files/stdin; no logbook needed.
    if let Some(file) = cli.check {
        return check_mode(&renderer, &file);
    }
    if let Some(file) = cli.fmt {
        return fmt_mode(&file, cli.write);
    }

    let logbook = Logbook::new()?;

    if cli.path {
        renderer.print_info(&format!("{}", logbook.config.log_dir.display()));
        return Ok(());
    }

    let date = resolve_date(cli.on.as_deref())?;

    if cli.edit {
        return edit_mode(&renderer, &logbook, date);
    }

    // View mode (default)
    let loaded = logbook.load_week(date)?;
    if Renderer::log_is_blank(&loaded.log) {
        renderer.print_info(&format!(
            "No log for this week yet ({}).",
            loaded.path.display()
        ));
        return Ok(());
    }
    renderer.print_log(&loaded.log);
    renderer.print_report(&loaded.report);
    Ok(())
}

fn resolve_date(on: Option<&str>) -> Result<NaiveDate> {
    match on {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("'{s}' is not a date (expected YYYY-MM-DD)")),
        None => Ok(Local::now().date_naive()),
    }
}

fn check_mode(renderer: &Renderer, file: &Path) -> Result<()> {
    let text = read_input(file)?;
    let report = validate(&text);
    match report.status {
        ValidationStatus::Valid => {
            renderer.print_info("Log is valid.");
            Ok(())
        }
        ValidationStatus::Warning => {
            renderer.print_report(&report);
            Ok(())
        }
        ValidationStatus::Error => {
            let message = report.error.unwrap_or_else(|| "invalid log".to_string());
            bail!("{message}")
        }
    }
}

fn fmt_mode(file: &Path, write: bool) -> Result<()> {
    let text = read_input(file)?;
    let canonical = format_weekly_log(&parse(&text));
    if write {
        if file == Path::new("-") {
            bail!("--write needs a file, not stdin");
        }
        fs::write(file, &canonical)
            .with_context(|| format!("writing {}", file.display()))?;
    } else {
        print!("{canonical}");
    }
    Ok(())
}

fn edit_mode(renderer: &Renderer, logbook: &Logbook, date: NaiveDate) -> Result<()> {
    let path = logbook.save_week_if_missing(date)?;
    let editor = resolve_editor(logbook);
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("launching editor '{editor}'"))?;
    if !status.success() {
        bail!("Editor exited with status {status}");
    }
    renderer.print_info(&format!("Edited file {}", path.display()));
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
    }
}

fn resolve_editor(logbook: &Logbook) -> String {
    logbook
        .config
        .editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}
