use std::path::PathBuf;

use thiserror::Error;

/// File-level failures. Row-level problems are reported as [`crate::RowRejection`]
/// values and never surface through this type.
#[derive(Error, Debug)]
pub enum GorodError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file}: missing required column: {column}")]
    Schema { file: String, column: String },

    #[error("{file}: only .xlsx/.xlsm workbooks are supported (convert .xls to .xlsx)")]
    UnsupportedFormat { file: String },

    #[error("not found: {}", .0.display())]
    Path(PathBuf),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("XML error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, GorodError>;
