use gorod_core::CellValue;

/// Parse a coordinate cell. Accepts numbers and text with either `,` or `.`
/// as the decimal separator; whitespace anywhere in the text is ignored.
pub fn parse_coordinate(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Numeric(n) => Some(*n),
        CellValue::Text(s) => {
            let normalized: String = s
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            normalized.parse::<f64>().ok()
        }
    }
}

/// Both coordinates within WGS84 bounds. NaN never passes.
pub fn in_range(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
