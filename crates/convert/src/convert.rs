use std::path::Path;

use gorod_core::{ConversionSummary, LabelSet, Result, ValidatedRow};
use tracing::{info, warn};

use crate::kml::{assemble, render};
use crate::validate::validate_row;
use crate::workbook::{file_label, read_report_rows};

/// Per-run settings shared by single-file and batch conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub sheet_name: String,
    pub labels: LabelSet,
}

impl ConvertOptions {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            labels: LabelSet::default(),
        }
    }

    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }
}

/// Convert one workbook into a KML file at `out_path`.
///
/// The output is written only after the whole document has rendered, so a
/// failing file leaves nothing behind.
pub fn excel_to_kml(
    excel_path: &Path,
    out_path: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionSummary> {
    let file = file_label(excel_path);
    let rows = read_report_rows(excel_path, &opts.sheet_name)?;
    let total_rows = rows.len();

    let mut problems = Vec::new();
    let mut valid: Vec<ValidatedRow> = Vec::with_capacity(total_rows);
    for row in rows {
        match validate_row(&file, row) {
            Ok(v) => valid.push(v),
            Err(rejection) => {
                warn!(file = %file, row = rejection.row, "{}", rejection);
                problems.push(rejection);
            }
        }
    }

    let doc_name = file_label(out_path);
    let doc = assemble(&doc_name, &valid, opts.labels);
    let written = doc.placemark_count();
    let xml = render(&doc)?;
    std::fs::write(out_path, xml)?;

    info!(
        file = %file,
        output = %out_path.display(),
        total_rows,
        written,
        skipped = problems.len(),
        "converted"
    );

    Ok(ConversionSummary {
        total_rows,
        written,
        problems,
    })
}
