//! KML document model: styles per district, okrug → district folders,
//! one placemark per validated report row.

mod assemble;
mod render;

pub use assemble::assemble;
pub use render::{break_between_tags, render};

use crate::folders::FolderTree;
use crate::style::DistrictStyle;

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const ICON_HREF: &str = "http://maps.google.com/mapfiles/kml/pushpin/ylw-pushpin.png";
pub const ICON_SCALE: &str = "1.2";
pub const LABEL_SCALE: &str = "0.9";

#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    /// `#style_…` reference, absent when the district has no style.
    pub style_url: Option<String>,
    /// HTML fragment, written as CDATA.
    pub description: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Placemark {
    /// `lon,lat,0` with 8 decimal places.
    pub fn coordinates(&self) -> String {
        format!("{:.8},{:.8},0", self.longitude, self.latitude)
    }
}

#[derive(Debug, Default)]
pub struct KmlDocument {
    pub name: String,
    /// Sorted by district name.
    pub styles: Vec<DistrictStyle>,
    pub folders: FolderTree,
}

impl KmlDocument {
    pub fn placemark_count(&self) -> usize {
        self.folders.placemark_count()
    }
}
