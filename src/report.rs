//! Run report collection and display
//!
//! The rewriter itself only yields per-file outcomes; this module
//! accumulates them into a run summary and formats it for the console
//! or as JSON.

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::rewrite::RewriteOutcome;

/// A file that was overwritten, with how many imports were fixed.
#[derive(Debug, Clone, Serialize)]
pub struct ChangedFile {
    pub path: PathBuf,
    pub substitutions: usize,
}

/// Aggregate results of one rewrite run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteReport {
    /// Files examined.
    pub scanned: usize,
    /// Files overwritten.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changed: Vec<ChangedFile>,
}

impl RewriteReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's outcome.
    pub fn record(&mut self, path: PathBuf, outcome: RewriteOutcome) {
        self.scanned += 1;
        if outcome.changed {
            self.changed.push(ChangedFile {
                path,
                substitutions: outcome.substitutions,
            });
        }
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub fn unchanged_count(&self) -> usize {
        self.scanned - self.changed.len()
    }

    /// Total import paths rewritten across all files.
    pub fn total_substitutions(&self) -> usize {
        self.changed.iter().map(|c| c.substitutions).sum()
    }
}

/// Print the report to stdout: one line per changed file, then a summary.
pub fn print_report(report: &RewriteReport, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for file in &report.changed {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", file.path.display())?;
        stdout.reset()?;
        writeln!(
            stdout,
            "  {} import{}",
            file.substitutions,
            if file.substitutions == 1 { "" } else { "s" }
        )?;
    }

    if !report.changed.is_empty() {
        writeln!(stdout)?;
    }

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        stdout,
        "{} files scanned, {} rewritten, {} unchanged",
        report.scanned,
        report.changed_count(),
        report.unchanged_count()
    )?;
    stdout.reset()?;

    Ok(())
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_report_json(report: &RewriteReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
