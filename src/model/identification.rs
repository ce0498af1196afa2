use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identification {
    pub source_id: Option<String>,
    pub barcode: Option<String>,
    pub catalog_links: Vec<CatalogLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogLink {
    pub catalog: String,
    pub catalog_record_id: String,
}

impl Identification {
    /// Record id in the named catalog, e.g. the symphony catkey.
    pub fn catalog_record_id(&self, catalog: &str) -> Option<&str> {
        self.catalog_links
            .iter()
            .find(|link| link.catalog == catalog)
            .map(|link| link.catalog_record_id.as_str())
    }
}
