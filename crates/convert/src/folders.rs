use std::collections::HashMap;

use tracing::debug;

use crate::kml::Placemark;

#[derive(Debug, Clone)]
pub struct DistrictFolder {
    pub name: String,
    pub placemarks: Vec<Placemark>,
}

#[derive(Debug, Clone)]
pub struct OkrugFolder {
    pub name: String,
    pub districts: Vec<DistrictFolder>,
}

/// Two-level okrug → district folder hierarchy for one document.
///
/// Folders are created on first use and kept in first-encounter order; the
/// index maps only point into the owned vectors.
#[derive(Debug, Default)]
pub struct FolderTree {
    okrugs: Vec<OkrugFolder>,
    okrug_index: HashMap<String, usize>,
    pair_index: HashMap<(String, String), (usize, usize)>,
}

impl FolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn okrug_slot(&mut self, okrug: &str) -> usize {
        if let Some(&idx) = self.okrug_index.get(okrug) {
            return idx;
        }
        debug!(okrug, "creating okrug folder");
        let idx = self.okrugs.len();
        self.okrugs.push(OkrugFolder {
            name: okrug.to_string(),
            districts: Vec::new(),
        });
        self.okrug_index.insert(okrug.to_string(), idx);
        idx
    }

    /// Folder for `(okrug, district)`, creating the okrug folder and then the
    /// district folder under it when missing.
    pub fn pair_folder(&mut self, okrug: &str, district: &str) -> &mut DistrictFolder {
        let key = (okrug.to_string(), district.to_string());
        let (o, d) = match self.pair_index.get(&key) {
            Some(&slot) => slot,
            None => {
                let o = self.okrug_slot(okrug);
                debug!(okrug, district, "creating district folder");
                let districts = &mut self.okrugs[o].districts;
                districts.push(DistrictFolder {
                    name: district.to_string(),
                    placemarks: Vec::new(),
                });
                let slot = (o, districts.len() - 1);
                self.pair_index.insert(key, slot);
                slot
            }
        };
        &mut self.okrugs[o].districts[d]
    }

    pub fn okrugs(&self) -> &[OkrugFolder] {
        &self.okrugs
    }

    pub fn placemark_count(&self) -> usize {
        self.okrugs
            .iter()
            .flat_map(|o| &o.districts)
            .map(|d| d.placemarks.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &FolderTree) -> Vec<(String, Vec<String>)> {
        tree.okrugs()
            .iter()
            .map(|o| {
                (
                    o.name.clone(),
                    o.districts.iter().map(|d| d.name.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn creates_folders_lazily_in_encounter_order() {
        let mut tree = FolderTree::new();
        tree.pair_folder("ЮАО", "Чертаново");
        tree.pair_folder("ЦАО", "Мещанский");
        tree.pair_folder("ЮАО", "Бирюлёво");
        tree.pair_folder("ЦАО", "Арбат");

        assert_eq!(
            names(&tree),
            vec![
                ("ЮАО".to_string(), vec!["Чертаново".to_string(), "Бирюлёво".to_string()]),
                ("ЦАО".to_string(), vec!["Мещанский".to_string(), "Арбат".to_string()]),
            ]
        );
    }

    #[test]
    fn same_pair_returns_same_folder() {
        let mut tree = FolderTree::new();
        tree.pair_folder("ЦАО", "Мещанский").name.push('!');
        let again = tree.pair_folder("ЦАО", "Мещанский");
        assert_eq!(again.name, "Мещанский!");
        assert_eq!(tree.okrugs().len(), 1);
        assert_eq!(tree.okrugs()[0].districts.len(), 1);
    }

    #[test]
    fn same_district_name_under_different_okrugs_is_distinct() {
        let mut tree = FolderTree::new();
        tree.pair_folder("A", "X");
        tree.pair_folder("B", "X");
        assert_eq!(tree.okrugs().len(), 2);
        assert_eq!(tree.okrugs()[0].districts.len(), 1);
        assert_eq!(tree.okrugs()[1].districts.len(), 1);
    }
}
