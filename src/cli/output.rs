//! Output formatting
//!
//! Plain-text tables, status pills and error display. Everything here only
//! consumes core records; no command logic lives in this module.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::environment::Environment;
use crate::core::status::{EnvStatus, StatusRecord};
use crate::error::{KosaioError, TargetError, EXIT_NOT_FOUND};

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output preferences taken from CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors and requested data
    pub quiet: bool,
    /// Emit JSON instead of tables
    pub json: bool,
    /// Verbosity level (`-v` count)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output preferences from CLI flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Tracing filter directive for these preferences
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Print an error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Exit code for an error returned by a command
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<KosaioError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<TargetError>() {
            return e.exit_code();
        }
    }
    EXIT_NOT_FOUND
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Bracketed status pill, e.g. `[✓*]` for installed and active
pub fn status_pill(status: EnvStatus, active: bool) -> String {
    let symbol = match status {
        EnvStatus::NotPresent => 'x',
        EnvStatus::SourceOnly => 'S',
        EnvStatus::Installed => '✓',
        EnvStatus::Broken => '!',
    };
    let marker = if active { '*' } else { ' ' };
    format!("[{symbol}{marker}]")
}

/// Container and host pills for a status record
pub fn status_pills(record: &StatusRecord) -> (String, String) {
    (
        status_pill(record.system, record.active == Environment::System),
        status_pill(record.host, record.active == Environment::Host),
    )
}

/// Legend explaining the status pills
pub fn legend() -> String {
    "STATUS: [✓]=Installed  [*]=Active  [x]=Not  [S]=Source  [!]=Issue\n\
     MODES:  CONT:Container  HOST:Host\n"
        .to_string()
}

/// Truncate `value` to `width` characters, marking the cut with `...`
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = value.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Render a fixed-width table
///
/// Columns are `(label, width)`; cells longer than their column are
/// truncated.
pub fn render_table(columns: &[(&str, usize)], rows: &[Vec<String>]) -> String {
    let mut output = String::new();

    let header: Vec<String> = columns
        .iter()
        .map(|&(label, width)| format!("{label:<width$}"))
        .collect();
    let separator: Vec<String> = columns.iter().map(|&(_, width)| "-".repeat(width)).collect();
    let _ = writeln!(output, "{}", header.join(" | ").trim_end());
    let _ = writeln!(output, "{}", separator.join("-+-"));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(&(_, width), value)| {
                let value = truncate(value, width);
                let pad = width.saturating_sub(value.chars().count());
                format!("{value}{}", " ".repeat(pad))
            })
            .collect();
        let _ = writeln!(output, "{}", cells.join(" | ").trim_end());
    }

    output
}
