use serde::{Deserialize, Serialize};

/// One entry of the external icon catalog (`icons.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub pascal_name: String,
    #[serde(default)]
    pub alias: Option<CatalogAlias>,
}

/// Another exported name for the same visual source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogAlias {
    pub name: String,
    pub pascal_name: String,
}
