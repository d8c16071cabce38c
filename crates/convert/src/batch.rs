use std::path::{Path, PathBuf};

use gorod_core::{ConversionSummary, GorodError, Result};
use tracing::{error, info, warn};

use crate::convert::{excel_to_kml, ConvertOptions};
use crate::workbook::is_supported;

/// Spreadsheet applications leave `~$name.xlsx` files next to open workbooks.
pub const LOCK_FILE_PREFIX: &str = "~$";
pub const OUTPUT_EXTENSION: &str = "kml";

#[derive(Debug)]
pub enum FileOutcome {
    Converted {
        output: PathBuf,
        summary: ConversionSummary,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug)]
pub struct BatchReport {
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Number of workbooks that produced a KML file.
    pub fn converted(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Converted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.converted()
    }
}

/// Workbooks directly inside `in_dir`, lock files excluded, sorted by path.
pub fn collect_workbooks(in_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(in_dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_supported(&path) {
            continue;
        }
        let is_lock = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with(LOCK_FILE_PREFIX))
            .unwrap_or(false);
        if !is_lock {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `<stem>.kml` for a workbook path.
pub fn output_name(workbook: &Path) -> String {
    let stem = workbook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// Convert every workbook in `in_dir` into `out_dir`, creating it if needed.
///
/// A failing workbook is recorded and the batch moves on. `on_file` sees each
/// report as soon as that file is done.
pub fn process_dir<F>(
    in_dir: &Path,
    out_dir: &Path,
    opts: &ConvertOptions,
    mut on_file: F,
) -> Result<BatchReport>
where
    F: FnMut(&FileReport),
{
    if !in_dir.is_dir() {
        return Err(GorodError::Path(in_dir.to_path_buf()));
    }
    std::fs::create_dir_all(out_dir)?;

    let workbooks = collect_workbooks(in_dir)?;
    if workbooks.is_empty() {
        warn!(dir = %in_dir.display(), "no .xlsx/.xlsm files found");
    }

    let mut files = Vec::with_capacity(workbooks.len());
    for input in workbooks {
        let output = out_dir.join(output_name(&input));
        let outcome = match excel_to_kml(&input, &output, opts) {
            Ok(summary) => FileOutcome::Converted { output, summary },
            Err(e) => {
                error!(file = %input.display(), error = %e, "conversion failed");
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        let report = FileReport { input, outcome };
        on_file(&report);
        files.push(report);
    }

    let report = BatchReport {
        in_dir: in_dir.to_path_buf(),
        out_dir: out_dir.to_path_buf(),
        files,
    };
    info!(
        dir = %in_dir.display(),
        converted = report.converted(),
        failed = report.failed(),
        "batch finished"
    );
    Ok(report)
}
