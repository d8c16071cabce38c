use std::collections::{BTreeSet, HashMap};

use gorod_core::{CellValue, LabelSet, ValidatedRow};
use tracing::debug;

use super::{KmlDocument, Placemark};
use crate::description::{build_description, DescriptionFields};
use crate::folders::FolderTree;
use crate::style::DistrictStyle;

/// Build the document for one file's validated rows, in row order.
///
/// Styles are keyed by the district cell as written and sorted by name;
/// folders and style lookups use the trimmed name. A district whose cell
/// carries surrounding whitespace therefore gets no `styleUrl`.
pub fn assemble(doc_name: &str, rows: &[ValidatedRow], labels: LabelSet) -> KmlDocument {
    let districts: BTreeSet<String> = rows
        .iter()
        .filter(|v| !matches!(v.row.district, CellValue::Empty))
        .map(|v| v.row.district.to_string())
        .collect();

    let styles: Vec<DistrictStyle> = districts
        .iter()
        .map(|d| DistrictStyle::for_district(d))
        .collect();
    debug!(count = styles.len(), "district styles computed");

    let style_ids: HashMap<&str, &str> = styles
        .iter()
        .map(|s| (s.district.as_str(), s.style_id.as_str()))
        .collect();

    let mut folders = FolderTree::new();
    for v in rows {
        let okrug = v.row.okrug.trimmed();
        let district = v.row.district.trimmed();

        let placemark = Placemark {
            name: v.message_id.clone(),
            style_url: style_ids.get(district.as_str()).map(|id| format!("#{id}")),
            description: build_description(&DescriptionFields::from_row(&v.row), labels),
            longitude: v.longitude,
            latitude: v.latitude,
        };
        folders.pair_folder(&okrug, &district).placemarks.push(placemark);
    }

    KmlDocument {
        name: doc_name.to_string(),
        styles,
        folders,
    }
}
