mod cli;
mod terminal;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gorod_convert::{excel_to_kml, process_dir, ConvertOptions};
use gorod_core::config::load_dotenv;
use gorod_core::{Config, GorodError};
use tracing::warn;

use crate::cli::CliArgs;
use crate::terminal::{counts, Terminal};

/// Exit code for a missing single input file.
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    load_dotenv();
    let config = Config::from_env();
    config.log_summary();

    let terminal = Terminal::new();
    match run(args, &config, &terminal) {
        Ok(code) => code,
        Err(e) => {
            terminal.print_error(&format!("{e:#}")).ok();
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs, config: &Config, terminal: &Terminal) -> Result<ExitCode> {
    let opts = ConvertOptions::new(args.sheet.unwrap_or_else(|| config.sheet_name.clone()))
        .with_labels(args.labels.unwrap_or(config.labels));

    match args.excel {
        Some(excel) => run_single(&excel, args.out, config, &opts, terminal),
        None => {
            let in_dir = args.in_dir.unwrap_or_else(|| config.reports_dir.clone());
            let out_dir = match args.out_dir.or_else(|| config.out_dir.clone()) {
                Some(dir) => dir,
                None => std::env::current_dir().context("cannot resolve current directory")?,
            };
            run_batch(&in_dir, &out_dir, &opts, terminal)
        }
    }
}

fn run_single(
    excel: &Path,
    out: Option<PathBuf>,
    config: &Config,
    opts: &ConvertOptions,
    terminal: &Terminal,
) -> Result<ExitCode> {
    if !excel.exists() {
        terminal.print_error(&format!("file not found: {}", excel.display()))?;
        return Ok(ExitCode::from(EXIT_NOT_FOUND));
    }

    let out = out.unwrap_or_else(|| {
        let ts = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        PathBuf::from(config.timestamped_output_name(&ts))
    });

    let summary = excel_to_kml(excel, &out, opts)
        .with_context(|| format!("failed to convert {}", excel.display()))?;

    terminal.print_ok(&format!("Done: {}  ({})", out.display(), counts(&summary)))?;
    if !summary.problems.is_empty() {
        terminal.print_section("Skipped rows")?;
        terminal.print_problems(&summary.problems)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_batch(
    in_dir: &Path,
    out_dir: &Path,
    opts: &ConvertOptions,
    terminal: &Terminal,
) -> Result<ExitCode> {
    let report = process_dir(in_dir, out_dir, opts, |file| {
        if let Err(e) = terminal.print_file_report(file) {
            warn!(error = %e, "failed to print file report");
        }
    });

    let converted = match report {
        Ok(report) => {
            if report.files.is_empty() {
                terminal.print_warn(&format!(
                    "no .xlsx/.xlsm files in {}",
                    in_dir.display()
                ))?;
            }
            report.converted()
        }
        Err(GorodError::Path(dir)) => {
            terminal.print_error(&format!("directory not found: {}", dir.display()))?;
            0
        }
        Err(e) => return Err(e).context("batch conversion failed"),
    };

    terminal.print_done(converted, in_dir)?;
    Ok(ExitCode::SUCCESS)
}
