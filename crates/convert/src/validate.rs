use gorod_core::{RejectReason, ReportRow, RowRejection, ValidatedRow};

use crate::coords::{in_range, parse_coordinate};

/// Check one row. The first failing rule wins: an empty message number is
/// reported even when the coordinates are also broken.
pub fn validate_row(file: &str, row: ReportRow) -> Result<ValidatedRow, RowRejection> {
    let position = row.position;
    let reject = |reason| RowRejection {
        file: file.to_string(),
        row: position,
        reason,
    };

    let message_id = row.message_id.trimmed();
    if message_id.is_empty() {
        return Err(reject(RejectReason::EmptyMessageNumber));
    }

    let lat = parse_coordinate(&row.latitude_raw);
    let lon = parse_coordinate(&row.longitude_raw);
    match (lat, lon) {
        (Some(latitude), Some(longitude)) if in_range(latitude, longitude) => Ok(ValidatedRow {
            message_id,
            latitude,
            longitude,
            row,
        }),
        _ => Err(reject(RejectReason::InvalidCoordinates {
            latitude: row.latitude_raw.to_string(),
            longitude: row.longitude_raw.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gorod_core::CellValue;

    fn row(id: &str, lat: &str, lon: &str) -> ReportRow {
        ReportRow {
            position: 7,
            message_id: CellValue::from(id),
            latitude_raw: CellValue::from(lat),
            longitude_raw: CellValue::from(lon),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_row() {
        let v = validate_row("f.xlsx", row(" 12345 ", "55,7887", "37.6279")).unwrap();
        assert_eq!(v.message_id, "12345");
        assert_eq!(v.latitude, 55.7887);
        assert_eq!(v.longitude, 37.6279);
        assert_eq!(v.row.position, 7);
    }

    #[test]
    fn empty_message_number_wins() {
        let err = validate_row("f.xlsx", row("  ", "abc", "def")).unwrap_err();
        assert_eq!(err.reason, RejectReason::EmptyMessageNumber);
        assert_eq!(err.row, 7);
        let msg = err.to_string();
        assert!(msg.contains("empty"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn unparseable_coordinates_keep_raw_text() {
        let err = validate_row("f.xlsx", row("1", "abc", "37,6")).unwrap_err();
        assert_eq!(
            err.reason,
            RejectReason::InvalidCoordinates {
                latitude: "abc".into(),
                longitude: "37,6".into()
            }
        );
        assert!(err.to_string().contains("lat=abc, lon=37,6"));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(validate_row("f.xlsx", row("1", "95", "37")).is_err());
        assert!(validate_row("f.xlsx", row("1", "55", "-181")).is_err());
    }

    #[test]
    fn numeric_message_number_is_accepted() {
        let r = ReportRow {
            position: 1,
            message_id: CellValue::Numeric(42.0),
            latitude_raw: CellValue::Numeric(10.0),
            longitude_raw: CellValue::Numeric(20.0),
            ..Default::default()
        };
        assert_eq!(validate_row("f.xlsx", r).unwrap().message_id, "42");
    }
}
