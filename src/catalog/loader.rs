use super::Catalog;
use crate::{FinderError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Loads a catalog from YAML, or falls back to the built-in one
pub struct CatalogLoader {
    /// Reject stores that have no items
    strict: bool,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Enable strict validation mode
    pub fn with_strict_validation(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Use the file at `path` if given, otherwise the built-in catalog
    pub fn resolve(&self, path: Option<&Path>) -> Result<Catalog> {
        match path {
            Some(path) => self.load_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load a catalog file from path
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinderError::Catalog(format!("Failed to read catalog file {}: {}", path.display(), e))
        })?;

        let catalog = self.parse(&contents).map_err(|e| match e {
            FinderError::YamlSerialization(e) => FinderError::Catalog(format!(
                "Failed to parse catalog file {}: {}",
                path.display(),
                e
            )),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            stores = catalog.stores().len(),
            items = catalog.item_count(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a YAML catalog document
    pub fn parse(&self, yaml: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_yaml_ng::from_str(yaml)?;
        self.validate(&catalog)?;
        Ok(catalog)
    }

    fn validate(&self, catalog: &Catalog) -> Result<()> {
        let mut seen = HashSet::new();

        for store in catalog.stores() {
            if store.name.trim().is_empty() {
                return Err(FinderError::Catalog("Store name cannot be empty".to_string()));
            }
            if !seen.insert(store.name.as_str()) {
                return Err(FinderError::Catalog(format!(
                    "Duplicate store name: {}",
                    store.name
                )));
            }
            if self.strict && store.items.is_empty() {
                return Err(FinderError::Catalog(format!(
                    "Store '{}' has no menu items",
                    store.name
                )));
            }
            for item in &store.items {
                if item.name.trim().is_empty() {
                    return Err(FinderError::Catalog(format!(
                        "Store '{}' has an item without a name",
                        store.name
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MenuItem, Store};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
stores:
  - name: KFC
    location: 123 Food St, City
    items:
      - name: Zinger Burger
        price: 50
        image: /images/kfc_zinger.jpg
      - name: Streetwise 2
        price: 40
        image: /images/kfc_streetwise.jpg
  - name: Corner Cafe
    location: 1 Side St
    items: []
"#;

    #[test]
    fn test_parse_sample() {
        let catalog = CatalogLoader::new().parse(SAMPLE).unwrap();
        assert_eq!(
            catalog.stores()[0],
            Store::new(
                "KFC",
                "123 Food St, City",
                vec![
                    MenuItem::new("Zinger Burger", 50, "/images/kfc_zinger.jpg"),
                    MenuItem::new("Streetwise 2", 40, "/images/kfc_streetwise.jpg"),
                ],
            )
        );
        assert_eq!(catalog.stores().len(), 2);
    }

    #[test]
    fn test_strict_rejects_empty_store() {
        let err = CatalogLoader::new()
            .with_strict_validation()
            .parse(SAMPLE)
            .unwrap_err();
        assert!(matches!(err, FinderError::Catalog(msg) if msg.contains("Corner Cafe")));
    }

    #[test]
    fn test_duplicate_store_rejected() {
        let yaml = r#"
stores:
  - name: KFC
    location: a
  - name: KFC
    location: b
"#;
        let err = CatalogLoader::new().parse(yaml).unwrap_err();
        assert!(matches!(err, FinderError::Catalog(msg) if msg.contains("Duplicate")));
    }

    #[test]
    fn test_negative_price_is_a_parse_error() {
        let yaml = r#"
stores:
  - name: KFC
    location: a
    items:
      - name: Refund
        price: -5
"#;
        assert!(matches!(
            CatalogLoader::new().parse(yaml),
            Err(FinderError::YamlSerialization(_))
        ));
    }

    #[test]
    fn test_load_file_and_resolve() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = CatalogLoader::new();
        let catalog = loader.resolve(Some(file.path())).unwrap();
        assert_eq!(catalog.item_count(), 2);

        assert_eq!(loader.resolve(None).unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogLoader::new()
            .load_file("/definitely/not/here.yaml")
            .unwrap_err();
        assert!(matches!(err, FinderError::Catalog(msg) if msg.contains("Failed to read")));
    }
}
