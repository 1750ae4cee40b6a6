//! Addon manifest served at `/manifest.json`

use serde::Serialize;
use serialgo_core::ContentType;

pub const ADDON_ID: &str = "org.serialgo.addon";
pub const ADDON_VERSION: &str = "1.0.0";

/// Id of the only catalog this addon publishes
pub const CATALOG_ID: &str = "serialgo";
/// Content type of the published catalog
pub const CATALOG_TYPE: ContentType = ContentType::Series;

/// Addon description returned to the client on install
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<ContentType>,
    pub catalogs: Vec<CatalogDescriptor>,
}

/// A catalog the addon publishes, addressed by type and id
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub id: &'static str,
    pub name: &'static str,
}

impl Manifest {
    /// Manifest of the SerialGo addon
    pub fn serialgo() -> Self {
        Self {
            id: ADDON_ID,
            version: ADDON_VERSION,
            name: "SerialGo Addon",
            description: "Watch SerialGo shows in Stremio",
            resources: vec!["catalog", "meta", "stream"],
            types: vec![ContentType::Movie, ContentType::Series],
            catalogs: vec![CatalogDescriptor {
                content_type: CATALOG_TYPE,
                id: CATALOG_ID,
                name: "SerialGo Shows",
            }],
        }
    }

    /// Whether `(content_type, id)` addresses a catalog declared here.
    pub fn has_catalog(&self, content_type: &str, id: &str) -> bool {
        self.catalogs
            .iter()
            .any(|c| c.content_type.as_str() == content_type && c.id == id)
    }
}
