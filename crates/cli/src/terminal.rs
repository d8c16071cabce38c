use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gorod_convert::{FileOutcome, FileReport};
use gorod_core::{ConversionSummary, RowRejection};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const OK: Color = Color::Green;
    const WARN: Color = Color::Yellow;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const HEADER: Color = Color::Magenta;
}

/// Line-oriented operator report. Errors go to stderr, everything else to stdout.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    fn tagged(&self, out: &mut impl Write, color: Color, tag: &str, msg: &str) -> Result<()> {
        execute!(
            out,
            SetForegroundColor(color),
            Print(tag),
            ResetColor,
            Print(format!(" {msg}\n")),
        )?;
        out.flush()?;
        Ok(())
    }

    pub fn print_ok(&self, msg: &str) -> Result<()> {
        self.tagged(&mut io::stdout(), Colors::OK, "[OK]", msg)
    }

    pub fn print_warn(&self, msg: &str) -> Result<()> {
        self.tagged(&mut io::stdout(), Colors::WARN, "[WARN]", msg)
    }

    pub fn print_error(&self, msg: &str) -> Result<()> {
        self.tagged(&mut io::stderr(), Colors::ERROR, "[ERR]", msg)
    }

    pub fn print_done(&self, converted: usize, in_dir: &Path) -> Result<()> {
        self.tagged(
            &mut io::stdout(),
            Colors::HEADER,
            "[DONE]",
            &format!("KML files created: {converted} (from {})", in_dir.display()),
        )
    }

    pub fn print_section(&self, title: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("---- {title} ----\n")),
            ResetColor,
        )?;
        Ok(())
    }

    pub fn print_problems(&self, problems: &[RowRejection]) -> Result<()> {
        let mut stdout = io::stdout();
        for p in problems {
            execute!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print(format!(" - {p}\n")),
                ResetColor,
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// One line per finished file in batch mode, followed by its skipped rows.
    pub fn print_file_report(&self, report: &FileReport) -> Result<()> {
        let input = file_name(&report.input);
        match &report.outcome {
            FileOutcome::Converted { output, summary } => {
                self.print_ok(&format!(
                    "{input} → {} ({})",
                    file_name(output),
                    counts(summary)
                ))?;
                self.print_problems(&summary.problems)
            }
            FileOutcome::Failed { reason } => self.print_error(&format!("{input}: {reason}")),
        }
    }
}

pub fn counts(summary: &ConversionSummary) -> String {
    format!(
        "total: {}, written: {}, skipped: {}",
        summary.total_rows,
        summary.written,
        summary.skipped()
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_line() {
        let summary = ConversionSummary {
            total_rows: 5,
            written: 3,
            problems: Vec::new(),
        };
        assert_eq!(counts(&summary), "total: 5, written: 3, skipped: 0");
    }
}
