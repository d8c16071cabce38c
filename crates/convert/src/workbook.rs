use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use gorod_core::{CellValue, GorodError, ReportRow, Result};
use tracing::debug;

/// Extensions accepted by the reader, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlsx", "xlsm"];

/// 0-based physical row holding the column headers; the two rows above it
/// are a report preamble.
pub const HEADER_ROW: usize = 2;

pub const COL_MESSAGE_ID: &str = "Номер сообщения";
pub const COL_OKRUG: &str = "Округ";
pub const COL_DISTRICT: &str = "Район";
pub const COL_ADDRESS: &str = "Адрес";
pub const COL_OBJECT: &str = "Название объекта";
pub const COL_TOPIC: &str = "Проблемная тема";
pub const COL_TEXT: &str = "Текст сообщения";
pub const COL_PHOTOS: &str = "Ссылки на фотографии сообщения";
pub const COL_LATITUDE: &str = "Широта";
pub const COL_LONGITUDE: &str = "Долгота";

/// Checked in this order; the first one missing is the one reported.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    COL_MESSAGE_ID,
    COL_OKRUG,
    COL_DISTRICT,
    COL_ADDRESS,
    COL_OBJECT,
    COL_TOPIC,
    COL_TEXT,
    COL_PHOTOS,
    COL_LATITUDE,
    COL_LONGITUDE,
];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read every data row of `sheet`. Fails on unsupported extensions, unreadable
/// workbooks, a missing sheet, or a missing required column.
pub fn read_report_rows(path: &Path, sheet: &str) -> Result<Vec<ReportRow>> {
    let file = file_label(path);
    if !is_supported(path) {
        return Err(GorodError::UnsupportedFormat { file });
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: XlsxError| GorodError::Workbook(format!("{file}: {e}")))?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| GorodError::Workbook(format!("{file}: sheet '{sheet}': {e}")))?;

    let grid = physical_grid(&range);
    debug!(file = %file, sheet, rows = grid.len(), "worksheet loaded");
    rows_from_grid(&file, &grid)
}

/// Re-anchor a used range at A1 so row indices are physical sheet rows.
fn physical_grid(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(cell_value));
        grid.push(cells);
    }
    grid
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Numeric(*i as f64),
        Data::Float(f) => CellValue::Numeric(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Numeric(dt.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Column positions of the required headers.
struct Columns([usize; 10]);

impl Columns {
    fn locate(file: &str, header: &[CellValue]) -> Result<Self> {
        let mut idx = [0usize; 10];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = header
                .iter()
                .position(|cell| matches!(cell, CellValue::Text(s) if s == name))
                .ok_or_else(|| GorodError::Schema {
                    file: file.to_string(),
                    column: name.to_string(),
                })?;
        }
        Ok(Columns(idx))
    }

    fn row(&self, position: usize, cells: &[CellValue]) -> ReportRow {
        let get = |i: usize| cells.get(self.0[i]).cloned().unwrap_or_default();
        ReportRow {
            position,
            message_id: get(0),
            okrug: get(1),
            district: get(2),
            address: get(3),
            object_name: get(4),
            topic: get(5),
            message_text: get(6),
            photo_links: get(7),
            latitude_raw: get(8),
            longitude_raw: get(9),
        }
    }
}

/// Turn a physical grid (row 0 = first sheet row) into report rows.
pub fn rows_from_grid(file: &str, grid: &[Vec<CellValue>]) -> Result<Vec<ReportRow>> {
    let header = grid.get(HEADER_ROW).map(Vec::as_slice).unwrap_or(&[]);
    let columns = Columns::locate(file, header)?;

    Ok(grid
        .iter()
        .skip(HEADER_ROW + 1)
        .enumerate()
        .map(|(i, cells)| columns.row(i + 1, cells))
        .collect())
}
