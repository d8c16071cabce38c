use std::fmt;

/// One spreadsheet cell. Workbooks mix text, numbers and blanks in the same
/// column, so every consumer matches on this instead of guessing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Numeric(f64),
    Text(String),
}

impl CellValue {
    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Numeric(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Cell contents as trimmed text; empty string for blank cells.
    pub fn trimmed(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Numeric(n)
    }
}

/// Renders numbers the way a spreadsheet shows them: `12345` rather than
/// `12345.0` for integral values.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Numeric(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Numeric(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// A raw data row of a report sheet, keyed by the required columns.
#[derive(Debug, Clone, Default)]
pub struct ReportRow {
    /// 1-based position among the data rows (the header row is not counted).
    pub position: usize,
    pub message_id: CellValue,
    pub okrug: CellValue,
    pub district: CellValue,
    pub address: CellValue,
    pub object_name: CellValue,
    pub topic: CellValue,
    pub message_text: CellValue,
    pub photo_links: CellValue,
    pub latitude_raw: CellValue,
    pub longitude_raw: CellValue,
}

impl ReportRow {
    /// Photo URLs from the semicolon-delimited cell, blank segments dropped.
    pub fn photo_links(&self) -> Vec<String> {
        self.photo_links
            .to_string()
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A row that passed validation: non-empty message number, coordinates in range.
#[derive(Debug, Clone)]
pub struct ValidatedRow {
    pub row: ReportRow,
    pub message_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    EmptyMessageNumber,
    /// Raw cell text is kept for the operator, not the parsed value.
    InvalidCoordinates { latitude: String, longitude: String },
}

/// Diagnostic for a skipped row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    pub file: String,
    pub row: usize,
    pub reason: RejectReason,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::EmptyMessageNumber => {
                write!(f, "{}: empty message number in row {}", self.file, self.row)
            }
            RejectReason::InvalidCoordinates { latitude, longitude } => write!(
                f,
                "{}: invalid coordinates in row {}: lat={}, lon={}",
                self.file, self.row, latitude, longitude
            ),
        }
    }
}

/// Outcome of converting one workbook.
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    /// Data rows in the sheet, rejected ones included.
    pub total_rows: usize,
    /// Placemarks written.
    pub written: usize,
    pub problems: Vec<RowRejection>,
}

impl ConversionSummary {
    pub fn skipped(&self) -> usize {
        self.problems.len()
    }
}
