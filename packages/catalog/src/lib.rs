include!(concat!(env!("OUT_DIR"), "/catalogs.rs"));

/// Name of the catalog the lookup page loads by default.
pub const DEFAULT_CATALOG: &str = "scales.json";

/// A catalog document with its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSource {
    pub name: &'static str,
    pub content: &'static str,
}

/// Get all embedded catalogs
pub fn get_all_catalogs() -> Vec<CatalogSource> {
    CATALOGS
        .iter()
        .map(|&(name, content)| CatalogSource { name, content })
        .collect()
}

/// Get a catalog by file name
pub fn get_catalog(name: &str) -> Option<CatalogSource> {
    CATALOGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(name, content)| CatalogSource { name, content })
}

/// List all catalog names
pub fn list_catalogs() -> Vec<&'static str> {
    CATALOGS.iter().map(|(name, _)| *name).collect()
}

/// JSON text of the default catalog, or an empty object if it was not bundled.
pub fn default_catalog_json() -> &'static str {
    get_catalog(DEFAULT_CATALOG).map_or("{}", |c| c.content)
}
