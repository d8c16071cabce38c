//! Spreadsheet incident reports → KML.
//!
//! Pipeline per workbook: [`workbook`] reads rows, [`validate`] filters them,
//! [`kml`] groups them into okrug/district folders with per-district styles
//! and renders the document. [`batch`] runs the pipeline over a directory.

pub mod batch;
pub mod convert;
pub mod coords;
pub mod description;
pub mod folders;
pub mod kml;
pub mod style;
pub mod validate;
pub mod workbook;

pub use batch::{process_dir, BatchReport, FileOutcome, FileReport};
pub use convert::{excel_to_kml, ConvertOptions};
